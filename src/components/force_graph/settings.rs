use leptos::prelude::*;
use log::debug;

use super::params::{ParamKey, Params};

/// One range slider per tunable, writing straight into the shared params.
#[component]
pub fn SettingsPanel(params: RwSignal<Params>) -> impl IntoView {
	let rows = ParamKey::ALL
		.into_iter()
		.map(|key| {
			let range = key.range();
			let on_input = move |ev: web_sys::Event| {
				let Ok(value) = event_target_value(&ev).parse::<f64>() else {
					return;
				};
				params.update(|p| {
					if let Some(effect) = p.set(key, value) {
						debug!("{} set to {value} ({effect:?})", key.label());
					}
				});
			};

			view! {
				<label class="param">
					<span class="param-name">{key.label()}</span>
					<input
						type="range"
						min=range.min.to_string()
						max=range.max.to_string()
						step=range.step.to_string()
						prop:value=move || params.with(|p| p.get(key)).to_string()
						on:input=on_input
					/>
					<span class="param-value">{move || format_value(params.with(|p| p.get(key)))}</span>
				</label>
			}
		})
		.collect_view();

	view! { <div class="settings-panel">{rows}</div> }
}

fn format_value(value: f64) -> String {
	if value.fract() == 0.0 {
		format!("{value:.0}")
	} else {
		format!("{value:.3}")
	}
}
