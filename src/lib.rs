//! ambient-backdrop: decorative animated backgrounds for static pages.
//!
//! This crate provides WASM components that draw a subtle moving backdrop
//! (bouncing particles on a canvas, floating markers animated by CSS) behind
//! otherwise static content.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::backdrop::{
	AmbientParticles, BackdropConfig, FloatingMarkers, MarkerConfig, PageBackdrop, Tone,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("ambient-backdrop: logging initialized");
}

/// Parse a page backdrop description.
pub fn parse_page_backdrop(json: &str) -> Result<PageBackdrop, serde_json::Error> {
	serde_json::from_str(json)
}

/// Load the backdrop description from a script element with id="backdrop-config".
/// Expected format: JSON with { particles: [{ color, count, size }], markers: { count } }
fn load_page_backdrop() -> Option<PageBackdrop> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("backdrop-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match parse_page_backdrop(&json_text) {
		Ok(page) => {
			info!(
				"ambient-backdrop: loaded {} particle layers, markers {}",
				page.particles.len(),
				if page.markers.is_some() { "on" } else { "off" }
			);
			Some(page)
		}
		Err(e) => {
			warn!("ambient-backdrop: failed to parse backdrop config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Reads the backdrop description from the DOM and mounts one layer per entry.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let page = load_page_backdrop().unwrap_or_else(|| PageBackdrop {
		particles: vec![BackdropConfig::default()],
		markers: Some(MarkerConfig::default()),
	});

	let layers = page
		.particles
		.into_iter()
		.map(|layer| {
			let layer = layer.validated();
			view! { <AmbientParticles color=layer.color count=layer.count size=layer.size /> }
		})
		.collect_view();
	let markers = page
		.markers
		.map(|m| {
			let m = m.validated();
			view! { <FloatingMarkers count=m.count /> }
		});

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Ambient Backdrop" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="backdrop-page" style="position: relative; min-height: 100vh; overflow: hidden;">
			{markers}
			{layers}
			<div class="backdrop-overlay" style="position: relative;">
				<h1>"Ambient Backdrop"</h1>
				<p class="subtitle">"Particles drift behind static content."</p>
			</div>
		</div>
	}
}
