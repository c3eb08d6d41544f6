//! Configuration accepted by the backdrop components.

use serde::Deserialize;

use super::theme::Tone;

/// Upper bound on particles per backdrop instance.
pub const MAX_COUNT: usize = 500;
/// Upper bound on floating markers per overlay.
pub const MAX_MARKERS: usize = 64;

fn default_count() -> usize {
	50
}

fn default_size() -> f64 {
	2.0
}

fn default_marker_count() -> usize {
	8
}

/// Settings for one particle backdrop.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BackdropConfig {
	/// Paint profile (`"dark"`/`"black"` or `"light"`/`"white"`).
	#[serde(default)]
	pub color: Tone,
	/// Number of particles.
	#[serde(default = "default_count")]
	pub count: usize,
	/// Base particle radius in pixels.
	#[serde(default = "default_size")]
	pub size: f64,
}

impl Default for BackdropConfig {
	fn default() -> Self {
		Self {
			color: Tone::default(),
			count: default_count(),
			size: default_size(),
		}
	}
}

impl BackdropConfig {
	/// Clamp values coming from props or JSON into a usable range.
	pub fn validated(self) -> Self {
		let size = if self.size.is_finite() && self.size > 0.0 {
			self.size
		} else {
			default_size()
		};
		Self {
			color: self.color,
			count: self.count.min(MAX_COUNT),
			size,
		}
	}
}

/// Settings for the floating markers overlay.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MarkerConfig {
	#[serde(default = "default_marker_count")]
	pub count: usize,
}

impl Default for MarkerConfig {
	fn default() -> Self {
		Self {
			count: default_marker_count(),
		}
	}
}

impl MarkerConfig {
	/// Cap the marker count; each marker costs a DOM node and a keyframes rule.
	pub fn validated(self) -> Self {
		Self {
			count: self.count.min(MAX_MARKERS),
		}
	}
}

/// Everything a page asks for: any number of particle layers and an
/// optional markers overlay.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PageBackdrop {
	#[serde(default)]
	pub particles: Vec<BackdropConfig>,
	#[serde(default)]
	pub markers: Option<MarkerConfig>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_uses_defaults() {
		let cfg: BackdropConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(cfg, BackdropConfig::default());
		assert_eq!(cfg.color, Tone::Dark);
		assert_eq!(cfg.count, 50);
		assert_eq!(cfg.size, 2.0);
	}

	#[test]
	fn page_config_parses_layers_and_markers() {
		let page: PageBackdrop = serde_json::from_str(
			r#"{
				"particles": [
					{ "color": "white", "count": 20, "size": 1 },
					{ "color": "black", "count": 25 }
				],
				"markers": {}
			}"#,
		)
		.unwrap();
		assert_eq!(page.particles.len(), 2);
		assert_eq!(page.particles[0].color, Tone::Light);
		assert_eq!(page.particles[0].size, 1.0);
		assert_eq!(page.particles[1].size, 2.0);
		assert_eq!(page.markers, Some(MarkerConfig { count: 8 }));
	}

	#[test]
	fn unknown_tone_is_rejected() {
		assert!(serde_json::from_str::<BackdropConfig>(r#"{ "color": "red" }"#).is_err());
	}

	#[test]
	fn marker_count_is_capped() {
		let page: PageBackdrop =
			serde_json::from_str(r#"{ "markers": { "count": 1000000 } }"#).unwrap();
		let markers = page.markers.unwrap().validated();
		assert_eq!(markers.count, MAX_MARKERS);
		assert_eq!(MarkerConfig { count: 12 }.validated().count, 12);
	}

	#[test]
	fn validated_repairs_bad_values() {
		let cfg = BackdropConfig {
			color: Tone::Light,
			count: 10_000,
			size: -3.0,
		}
		.validated();
		assert_eq!(cfg.count, MAX_COUNT);
		assert_eq!(cfg.size, 2.0);
		assert_eq!(cfg.color, Tone::Light);

		let nan = BackdropConfig {
			size: f64::NAN,
			..BackdropConfig::default()
		};
		assert_eq!(nan.validated().size, 2.0);
	}
}
