//! Paint profiles for the backdrop.
//!
//! The backdrop only ever paints in two tones. Dark draws near-black dots at
//! low alpha for light page sections; light draws near-white dots at a higher
//! alpha for dark sections.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Which paint profile a backdrop uses.
///
/// Pages name these `"black"`/`"white"` after the dot color, so both
/// spellings are accepted when deserializing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
	#[default]
	#[serde(alias = "black")]
	Dark,
	#[serde(alias = "white")]
	Light,
}

impl Tone {
	/// Base dot color before the per-particle opacity is applied.
	pub const fn base(self) -> Color {
		match self {
			Tone::Dark => Color::rgb(0, 0, 0),
			Tone::Light => Color::rgb(255, 255, 255),
		}
	}

	/// Global alpha multiplier keeping the effect subtle.
	pub const fn alpha_scale(self) -> f64 {
		match self {
			Tone::Dark => 0.3,
			Tone::Light => 0.6,
		}
	}

	/// Final fill color for a particle with the given opacity.
	pub fn paint(self, opacity: f64) -> Color {
		self.base().with_alpha(opacity * self.alpha_scale())
	}
}

/// Visual style of a floating marker dot.
#[derive(Clone, Debug)]
pub struct MarkerStyle {
	pub color: Color,
	/// Edge length in CSS pixels.
	pub size: f64,
}

impl Default for MarkerStyle {
	fn default() -> Self {
		Self {
			color: Color::rgba(0, 0, 0, 0.1),
			size: 8.0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dark_paint_is_black_at_reduced_alpha() {
		let c = Tone::Dark.paint(0.5);
		assert_eq!((c.r, c.g, c.b), (0, 0, 0));
		assert!((c.a - 0.15).abs() < 1e-12);
	}

	#[test]
	fn light_paint_is_white_at_higher_alpha() {
		let c = Tone::Light.paint(0.5);
		assert_eq!((c.r, c.g, c.b), (255, 255, 255));
		assert!((c.a - 0.3).abs() < 1e-12);
	}

	#[test]
	fn css_output_switches_on_alpha() {
		assert_eq!(Color::rgb(255, 0, 16).to_css(), "#ff0010");
		assert_eq!(Color::rgba(0, 0, 0, 0.25).to_css(), "rgba(0, 0, 0, 0.25)");
	}

	#[test]
	fn tone_accepts_page_aliases() {
		let dark: Tone = serde_json::from_str("\"black\"").unwrap();
		let light: Tone = serde_json::from_str("\"white\"").unwrap();
		assert_eq!(dark, Tone::Dark);
		assert_eq!(light, Tone::Light);
		let light: Tone = serde_json::from_str("\"light\"").unwrap();
		assert_eq!(light, Tone::Light);
	}
}
