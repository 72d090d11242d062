mod component;
mod distance;
mod interaction;
mod params;
mod radial;
mod render;
mod settings;
mod simulation;
mod state;
mod tree;
mod types;
mod view;

pub use component::ForceGraphCanvas;
pub use params::Params;
pub use settings::SettingsPanel;
