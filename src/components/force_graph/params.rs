//! Runtime-tunable parameters.
//!
//! [`Params`] is a plain value passed into every consumer; each accepted edit
//! bumps [`Params::version`] so consumers can tell a fresh value from a stale
//! one without comparing every field.

#[derive(Clone, Debug, PartialEq)]
pub struct TreeParams {
	pub max_depth: u32,
	pub branching_factor: u32,
	/// Screen-space margin kept around the fitted tree.
	pub padding: f64,
	/// Ring spacing for the radial layout.
	pub radial_spacing: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForceParams {
	pub edge_length: f64,
	pub repulsion_strength: f64,
	pub attraction_strength: f64,
	pub damping_factor: f64,
	/// Floor on pair distance in force magnitudes.
	pub min_force_distance: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Appearance {
	pub node_radius: f64,
	pub hover_radius: f64,
	pub edge_width: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Params {
	pub version: u64,
	pub tree: TreeParams,
	pub forces: ForceParams,
	pub appearance: Appearance,
}

impl Default for Params {
	fn default() -> Self {
		Self {
			version: 0,
			tree: TreeParams {
				max_depth: 4,
				branching_factor: 3,
				padding: 50.0,
				radial_spacing: 50.0,
			},
			forces: ForceParams {
				edge_length: 80.0,
				repulsion_strength: 500.0,
				attraction_strength: 0.05,
				damping_factor: 0.95,
				min_force_distance: 7.0,
			},
			appearance: Appearance {
				node_radius: 15.0,
				hover_radius: 20.0,
				edge_width: 10.0,
			},
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKey {
	MaxDepth,
	BranchingFactor,
	Padding,
	RadialSpacing,
	EdgeLength,
	RepulsionStrength,
	AttractionStrength,
	DampingFactor,
	MinForceDistance,
	NodeRadius,
	HoverRadius,
	EdgeWidth,
}

/// Slider bounds for one key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRange {
	pub min: f64,
	pub max: f64,
	pub step: f64,
}

/// What a caller has to do after an accepted edit, weakest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ParamEffect {
	/// Picked up by the next frame.
	Live,
	/// Same tree, back to the radial starting layout.
	Relayout,
	/// Tree shape changed; nodes and edges must be rebuilt.
	Rebuild,
}

impl ParamKey {
	pub const ALL: [ParamKey; 12] = [
		ParamKey::MaxDepth,
		ParamKey::BranchingFactor,
		ParamKey::Padding,
		ParamKey::RadialSpacing,
		ParamKey::EdgeLength,
		ParamKey::RepulsionStrength,
		ParamKey::AttractionStrength,
		ParamKey::DampingFactor,
		ParamKey::MinForceDistance,
		ParamKey::NodeRadius,
		ParamKey::HoverRadius,
		ParamKey::EdgeWidth,
	];

	pub fn label(self) -> &'static str {
		match self {
			ParamKey::MaxDepth => "Tree depth",
			ParamKey::BranchingFactor => "Branching factor",
			ParamKey::Padding => "Padding",
			ParamKey::RadialSpacing => "Radial spacing",
			ParamKey::EdgeLength => "Edge length",
			ParamKey::RepulsionStrength => "Repulsion",
			ParamKey::AttractionStrength => "Attraction",
			ParamKey::DampingFactor => "Damping",
			ParamKey::MinForceDistance => "Min force distance",
			ParamKey::NodeRadius => "Node radius",
			ParamKey::HoverRadius => "Hover radius",
			ParamKey::EdgeWidth => "Edge width",
		}
	}

	pub fn range(self) -> ParamRange {
		let (min, max, step) = match self {
			ParamKey::MaxDepth => (1.0, 5.0, 1.0),
			ParamKey::BranchingFactor => (1.0, 4.0, 1.0),
			ParamKey::Padding => (0.0, 200.0, 5.0),
			ParamKey::RadialSpacing => (10.0, 200.0, 5.0),
			ParamKey::EdgeLength => (10.0, 300.0, 5.0),
			ParamKey::RepulsionStrength => (0.0, 5000.0, 50.0),
			ParamKey::AttractionStrength => (0.0, 0.5, 0.005),
			ParamKey::DampingFactor => (0.0, 0.99, 0.01),
			ParamKey::MinForceDistance => (1.0, 50.0, 1.0),
			ParamKey::NodeRadius => (2.0, 40.0, 1.0),
			ParamKey::HoverRadius => (2.0, 50.0, 1.0),
			ParamKey::EdgeWidth => (1.0, 20.0, 1.0),
		};
		ParamRange { min, max, step }
	}

	pub fn effect(self) -> ParamEffect {
		match self {
			ParamKey::MaxDepth | ParamKey::BranchingFactor => ParamEffect::Rebuild,
			ParamKey::RadialSpacing => ParamEffect::Relayout,
			_ => ParamEffect::Live,
		}
	}

	fn is_integral(self) -> bool {
		matches!(self, ParamKey::MaxDepth | ParamKey::BranchingFactor)
	}
}

impl Params {
	pub fn get(&self, key: ParamKey) -> f64 {
		match key {
			ParamKey::MaxDepth => self.tree.max_depth as f64,
			ParamKey::BranchingFactor => self.tree.branching_factor as f64,
			ParamKey::Padding => self.tree.padding,
			ParamKey::RadialSpacing => self.tree.radial_spacing,
			ParamKey::EdgeLength => self.forces.edge_length,
			ParamKey::RepulsionStrength => self.forces.repulsion_strength,
			ParamKey::AttractionStrength => self.forces.attraction_strength,
			ParamKey::DampingFactor => self.forces.damping_factor,
			ParamKey::MinForceDistance => self.forces.min_force_distance,
			ParamKey::NodeRadius => self.appearance.node_radius,
			ParamKey::HoverRadius => self.appearance.hover_radius,
			ParamKey::EdgeWidth => self.appearance.edge_width,
		}
	}

	/// Clamp `value` into the key's range and store it. Returns `None` when
	/// the stored value did not change (or `value` is not a number).
	pub fn set(&mut self, key: ParamKey, value: f64) -> Option<ParamEffect> {
		if value.is_nan() {
			return None;
		}
		let range = key.range();
		let mut value = value.clamp(range.min, range.max);
		if key.is_integral() {
			value = value.round();
		}
		if self.get(key) == value {
			return None;
		}

		match key {
			ParamKey::MaxDepth => self.tree.max_depth = value as u32,
			ParamKey::BranchingFactor => self.tree.branching_factor = value as u32,
			ParamKey::Padding => self.tree.padding = value,
			ParamKey::RadialSpacing => self.tree.radial_spacing = value,
			ParamKey::EdgeLength => self.forces.edge_length = value,
			ParamKey::RepulsionStrength => self.forces.repulsion_strength = value,
			ParamKey::AttractionStrength => self.forces.attraction_strength = value,
			ParamKey::DampingFactor => self.forces.damping_factor = value,
			ParamKey::MinForceDistance => self.forces.min_force_distance = value,
			ParamKey::NodeRadius => self.appearance.node_radius = value,
			ParamKey::HoverRadius => self.appearance.hover_radius = value,
			ParamKey::EdgeWidth => self.appearance.edge_width = value,
		}
		self.version += 1;
		Some(key.effect())
	}

	/// Strongest effect among the keys that differ between `self` and `next`,
	/// or `None` when every value matches.
	pub fn effect_of(&self, next: &Params) -> Option<ParamEffect> {
		ParamKey::ALL
			.into_iter()
			.filter(|&key| self.get(key) != next.get(key))
			.map(ParamKey::effect)
			.max()
	}

	/// Depth and branching factor, the two values that define the tree.
	pub fn shape(&self) -> (u32, u32) {
		(self.tree.max_depth, self.tree.branching_factor)
	}
}
