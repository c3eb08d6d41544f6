//! Floating markers: small dots that drift between two random points.
//!
//! Motion is not stepped here. Each marker contributes a CSS `@keyframes`
//! rule and the browser interpolates it linearly, alternating direction
//! forever. [`FloatingMarker::position_at`] mirrors what the browser does.

use fastrand::Rng;

use super::surface::SurfaceSize;

/// Shortest and longest one-way travel time, in seconds.
pub const DURATION_RANGE: (f64, f64) = (15.0, 25.0);

/// A dot animated from `start` to `target` and back.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingMarker {
	pub start: (f64, f64),
	pub target: (f64, f64),
	/// Seconds for one leg of the trip.
	pub duration: f64,
}

impl FloatingMarker {
	fn random(rng: &mut Rng, viewport: SurfaceSize) -> Self {
		let (lo, hi) = DURATION_RANGE;
		Self {
			start: (rng.f64() * viewport.width, rng.f64() * viewport.height),
			target: (rng.f64() * viewport.width, rng.f64() * viewport.height),
			duration: lo + rng.f64() * (hi - lo),
		}
	}

	/// Position at `t` seconds under linear easing with alternating direction.
	pub fn position_at(&self, t: f64) -> (f64, f64) {
		let legs = t.max(0.0) / self.duration;
		let leg = legs.floor();
		let frac = legs - leg;
		// Even legs run start -> target, odd legs run back.
		let progress = if leg as u64 % 2 == 0 { frac } else { 1.0 - frac };
		(
			self.start.0 + (self.target.0 - self.start.0) * progress,
			self.start.1 + (self.target.1 - self.start.1) * progress,
		)
	}

	/// CSS keyframes rule moving this marker between its endpoints.
	pub fn keyframes(&self, name: &str) -> String {
		format!(
			"@keyframes {name} {{ from {{ transform: translate({:.2}px, {:.2}px); }} to {{ transform: translate({:.2}px, {:.2}px); }} }}",
			self.start.0, self.start.1, self.target.0, self.target.1
		)
	}

	/// Inline style binding this marker to its keyframes rule.
	pub fn animation_style(&self, name: &str) -> String {
		format!(
			"transform: translate({:.2}px, {:.2}px); animation: {name} {:.3}s linear 0s infinite alternate;",
			self.start.0, self.start.1, self.duration
		)
	}
}

/// The markers shown on one page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkerField {
	pub markers: Vec<FloatingMarker>,
}

impl MarkerField {
	/// Lay out `count` markers inside the viewport.
	///
	/// The viewport is only known once the client is ready. Until then
	/// (`None`, or a zero-sized window) the field stays empty rather than
	/// guessing a size.
	pub fn new(viewport: Option<SurfaceSize>, count: usize, rng: &mut Rng) -> Self {
		let Some(viewport) = viewport.filter(SurfaceSize::is_drawable) else {
			return Self::default();
		};
		Self {
			markers: (0..count)
				.map(|_| FloatingMarker::random(rng, viewport))
				.collect(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.markers.is_empty()
	}

	/// All keyframe rules, one per marker, named `{prefix}-{index}`.
	pub fn stylesheet(&self, prefix: &str) -> String {
		self.markers
			.iter()
			.enumerate()
			.map(|(i, m)| m.keyframes(&format!("{prefix}-{i}")))
			.collect::<Vec<_>>()
			.join("\n")
	}
}
