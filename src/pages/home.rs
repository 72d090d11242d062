use leptos::prelude::*;

use crate::components::force_graph::{ForceGraphCanvas, Params, SettingsPanel};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	// Shared by the canvas and the sliders
	let params = RwSignal::new(Params::default());

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<ForceGraphCanvas params=params fullscreen=true />
				<div class="graph-overlay">
					<h1>"Radial Force Tree"</h1>
					<p class="subtitle">"Drag nodes to reposition. Tune the layout with the sliders."</p>
					<SettingsPanel params=params />
				</div>
			</div>
		</ErrorBoundary>
	}
}
