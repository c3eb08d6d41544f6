//! Drawing surface abstraction.
//!
//! The particle field paints through [`DrawSurface`] so the per-frame logic
//! can run against a real canvas in the browser and against a recording
//! double in native tests.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::theme::Color;

/// Logical pixel dimensions of a drawing surface or viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
	pub width: f64,
	pub height: f64,
}

impl SurfaceSize {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Zero-sized or unmeasured surfaces are not drawable.
	pub fn is_drawable(&self) -> bool {
		self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
	}

	/// Whole-pixel size of a canvas backing store laid out at this size.
	pub fn backing(self) -> Self {
		let px = |v: f64| if v.is_finite() { v.max(0.0).trunc() } else { 0.0 };
		Self::new(px(self.width), px(self.height))
	}
}

/// Minimal 2D painting interface needed by the backdrop.
pub trait DrawSurface {
	/// Clear the whole surface.
	fn clear(&self, size: SurfaceSize);
	/// Paint a filled circle.
	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: Color);
}

impl DrawSurface for CanvasRenderingContext2d {
	fn clear(&self, size: SurfaceSize) {
		self.clear_rect(0.0, 0.0, size.width, size.height);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: Color) {
		self.set_fill_style_str(&color.to_css());
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_or_unmeasured_sizes_are_not_drawable() {
		assert!(!SurfaceSize::new(0.0, 100.0).is_drawable());
		assert!(!SurfaceSize::new(100.0, 0.0).is_drawable());
		assert!(!SurfaceSize::new(f64::NAN, 100.0).is_drawable());
		assert!(!SurfaceSize::default().is_drawable());
		assert!(SurfaceSize::new(1.0, 1.0).is_drawable());
	}

	#[test]
	fn backing_size_is_whole_pixels() {
		assert_eq!(
			SurfaceSize::new(100.7, 50.2).backing(),
			SurfaceSize::new(100.0, 50.0)
		);
		assert_eq!(
			SurfaceSize::new(-4.0, f64::NAN).backing(),
			SurfaceSize::new(0.0, 0.0)
		);
		assert!(!SurfaceSize::new(0.6, 300.0).backing().is_drawable());
	}
}
