//! Drifting particles that bounce off the edges of their surface.

use fastrand::Rng;

use super::surface::{DrawSurface, SurfaceSize};
use super::theme::Tone;

/// Largest absolute velocity component, in pixels per tick.
pub const MAX_SPEED: f64 = 0.25;
/// Opacity is drawn from `[MIN_OPACITY, 1.0)`.
pub const MIN_OPACITY: f64 = 0.2;

/// A single drifting particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub opacity: f64,
}

impl Particle {
	fn random(rng: &mut Rng, size: SurfaceSize, base_radius: f64) -> Self {
		Self {
			x: rng.f64() * size.width,
			y: rng.f64() * size.height,
			vx: (rng.f64() - 0.5) * 2.0 * MAX_SPEED,
			vy: (rng.f64() - 0.5) * 2.0 * MAX_SPEED,
			radius: base_radius + rng.f64(),
			opacity: MIN_OPACITY + rng.f64() * (1.0 - MIN_OPACITY),
		}
	}

	/// Advance one tick inside `size`.
	///
	/// Reflection is decided on the unclamped position, then the position is
	/// clamped. A particle landing exactly on an edge flips there and moves
	/// back inside on the next tick.
	fn step(&mut self, size: SurfaceSize) {
		self.x += self.vx;
		self.y += self.vy;

		if self.x <= 0.0 || self.x >= size.width {
			self.vx = -self.vx;
		}
		if self.y <= 0.0 || self.y >= size.height {
			self.vy = -self.vy;
		}

		self.x = self.x.clamp(0.0, size.width);
		self.y = self.y.clamp(0.0, size.height);
	}
}

/// A fixed-size set of particles living on one surface.
///
/// Created once the surface has been measured, then mutated in place every
/// animation tick until the owning component unmounts.
#[derive(Clone, Debug)]
pub struct ParticleField {
	pub particles: Vec<Particle>,
	size: SurfaceSize,
}

impl ParticleField {
	/// Scatter `count` particles over the surface.
	///
	/// Returns `None` when the surface is not drawable yet.
	pub fn new(size: SurfaceSize, count: usize, base_radius: f64, rng: &mut Rng) -> Option<Self> {
		if !size.is_drawable() {
			return None;
		}
		let particles = (0..count)
			.map(|_| Particle::random(rng, size, base_radius))
			.collect();
		Some(Self { particles, size })
	}

	/// Build a field from explicit particles.
	pub fn from_particles(size: SurfaceSize, particles: Vec<Particle>) -> Self {
		Self { particles, size }
	}

	pub fn size(&self) -> SurfaceSize {
		self.size
	}

	/// Update particle positions without drawing.
	pub fn step(&mut self) {
		let size = self.size;
		for p in &mut self.particles {
			p.step(size);
		}
	}

	/// One full animation tick: clear, advance, repaint.
	pub fn tick<S: DrawSurface + ?Sized>(&mut self, surface: &S, tone: Tone) {
		surface.clear(self.size);
		self.step();
		for p in &self.particles {
			surface.fill_circle(p.x, p.y, p.radius, tone.paint(p.opacity));
		}
	}

	/// Resize the field bounds, scaling positions proportionally.
	pub fn resize(&mut self, size: SurfaceSize) {
		if !size.is_drawable() {
			return;
		}
		let scale_x = size.width / self.size.width;
		let scale_y = size.height / self.size.height;

		for p in &mut self.particles {
			p.x = (p.x * scale_x).clamp(0.0, size.width);
			p.y = (p.y * scale_y).clamp(0.0, size.height);
		}

		self.size = size;
	}
}
