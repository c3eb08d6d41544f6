//! Per-instance animation state and its mount/unmount lifecycle.
//!
//! The animator owns the drawing surface and the particle field between
//! mount and stop. The browser frame loop calls [`Animator::frame`] and only
//! schedules another frame while it returns `true`.

use fastrand::Rng;
use log::debug;

use super::particles::ParticleField;
use super::surface::{DrawSurface, SurfaceSize};
use super::types::BackdropConfig;

/// Lifecycle phase of an [`Animator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	/// Not mounted yet, or mount was skipped because the surface was unusable.
	Idle,
	Running,
	/// Stopped for good; the instance never draws again.
	Stopped,
}

struct Mounted<S> {
	surface: S,
	field: ParticleField,
}

/// Drives one particle backdrop on one surface.
pub struct Animator<S: DrawSurface> {
	config: BackdropConfig,
	phase: Phase,
	mounted: Option<Mounted<S>>,
}

impl<S: DrawSurface> Animator<S> {
	pub fn new(config: BackdropConfig) -> Self {
		Self {
			config: config.validated(),
			phase: Phase::Idle,
			mounted: None,
		}
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub fn field(&self) -> Option<&ParticleField> {
		self.mounted.as_ref().map(|m| &m.field)
	}

	/// Attach to a measured surface and scatter the particles.
	///
	/// Returns `true` when the animator is running afterwards. An unusable
	/// surface leaves it idle; a stopped animator stays stopped.
	pub fn mount(&mut self, surface: S, size: SurfaceSize, rng: &mut Rng) -> bool {
		match self.phase {
			Phase::Running => return true,
			Phase::Stopped => return false,
			Phase::Idle => {}
		}
		let Some(field) = ParticleField::new(size, self.config.count, self.config.size, rng) else {
			debug!(
				"ambient-backdrop: surface {}x{} not drawable, skipping",
				size.width, size.height
			);
			return false;
		};
		debug!(
			"ambient-backdrop: mounted {} particles on {}x{}",
			self.config.count, size.width, size.height
		);
		self.mounted = Some(Mounted { surface, field });
		self.phase = Phase::Running;
		true
	}

	/// Run one tick. Returns whether another frame should be scheduled.
	pub fn frame(&mut self) -> bool {
		if self.phase != Phase::Running {
			return false;
		}
		let Some(m) = self.mounted.as_mut() else {
			return false;
		};
		m.field.tick(&m.surface, self.config.color);
		true
	}

	/// Follow a surface resize. Non-drawable sizes keep the current bounds.
	pub fn resize(&mut self, size: SurfaceSize) {
		let Some(m) = self.mounted.as_mut() else {
			return;
		};
		if !size.is_drawable() {
			debug!(
				"ambient-backdrop: resize to {}x{} not drawable, keeping bounds",
				size.width, size.height
			);
			return;
		}
		debug!("ambient-backdrop: resized to {}x{}", size.width, size.height);
		m.field.resize(size);
	}

	/// Stop and release the surface. Safe to call any number of times.
	pub fn stop(&mut self) {
		if self.phase == Phase::Stopped {
			return;
		}
		if self.mounted.take().is_some() {
			debug!("ambient-backdrop: stopped");
		}
		self.phase = Phase::Stopped;
	}
}

#[cfg(test)]
mod tests {
	use std::rc::Rc;

	use super::super::surface::recording::RecordingSurface;
	use super::super::theme::Tone;
	use super::*;

	fn config(count: usize) -> BackdropConfig {
		BackdropConfig {
			color: Tone::Dark,
			count,
			size: 1.0,
		}
	}

	#[test]
	fn frame_before_mount_draws_nothing() {
		let mut animator: Animator<Rc<RecordingSurface>> = Animator::new(config(5));
		assert!(!animator.frame());
		assert_eq!(animator.phase(), Phase::Idle);
	}

	#[test]
	fn unusable_surface_stays_idle() {
		let surface = Rc::new(RecordingSurface::default());
		let mut animator = Animator::new(config(5));
		let mut rng = Rng::with_seed(1);
		assert!(!animator.mount(surface.clone(), SurfaceSize::new(0.0, 0.0), &mut rng));
		assert_eq!(animator.phase(), Phase::Idle);
		assert!(!animator.frame());
		assert_eq!(surface.call_count(), 0);

		// A later mount with a measured surface still works.
		assert!(animator.mount(surface.clone(), SurfaceSize::new(10.0, 10.0), &mut rng));
		assert!(animator.frame());
		assert_eq!(surface.circles(), 5);
	}

	#[test]
	fn each_frame_clears_and_draws_every_particle() {
		let surface = Rc::new(RecordingSurface::default());
		let mut animator = Animator::new(config(7));
		let mut rng = Rng::with_seed(2);
		assert!(animator.mount(surface.clone(), SurfaceSize::new(64.0, 48.0), &mut rng));
		for _ in 0..3 {
			assert!(animator.frame());
		}
		assert_eq!(surface.call_count(), 3 * 8);
		assert_eq!(surface.circles(), 3 * 7);
	}

	#[test]
	fn stop_prevents_further_draws_and_is_idempotent() {
		let surface = Rc::new(RecordingSurface::default());
		let mut animator = Animator::new(config(3));
		let mut rng = Rng::with_seed(3);
		animator.mount(surface.clone(), SurfaceSize::new(30.0, 30.0), &mut rng);
		animator.frame();
		let drawn = surface.call_count();

		animator.stop();
		animator.stop();
		assert_eq!(animator.phase(), Phase::Stopped);
		assert!(animator.field().is_none());
		assert!(!animator.frame());
		assert_eq!(surface.call_count(), drawn);

		// Remounting a stopped instance is refused.
		assert!(!animator.mount(surface.clone(), SurfaceSize::new(30.0, 30.0), &mut rng));
		assert!(!animator.frame());
		assert_eq!(surface.call_count(), drawn);
	}

	#[test]
	fn zero_particles_clears_only() {
		let surface = Rc::new(RecordingSurface::default());
		let mut animator = Animator::new(config(0));
		let mut rng = Rng::with_seed(4);
		assert!(animator.mount(surface.clone(), SurfaceSize::new(100.0, 100.0), &mut rng));
		assert!(animator.frame());
		assert_eq!(surface.call_count(), 1);
		assert_eq!(surface.circles(), 0);
	}

	#[test]
	fn resize_is_forwarded_to_the_field() {
		let surface = Rc::new(RecordingSurface::default());
		let mut animator = Animator::new(config(20));
		let mut rng = Rng::with_seed(5);
		animator.mount(surface, SurfaceSize::new(400.0, 400.0), &mut rng);
		animator.resize(SurfaceSize::new(100.0, 50.0));
		let field = animator.field().unwrap();
		assert_eq!(field.size(), SurfaceSize::new(100.0, 50.0));
		assert!(field.particles.iter().all(|p| p.x <= 100.0 && p.y <= 50.0));
	}

	#[test]
	fn collapsed_resize_keeps_bounds_and_keeps_drawing() {
		let surface = Rc::new(RecordingSurface::default());
		let mut animator = Animator::new(config(4));
		let mut rng = Rng::with_seed(6);
		animator.mount(surface.clone(), SurfaceSize::new(120.0, 80.0), &mut rng);
		animator.resize(SurfaceSize::new(0.0, 80.0));
		assert_eq!(animator.field().unwrap().size(), SurfaceSize::new(120.0, 80.0));
		assert!(animator.frame());
		assert_eq!(surface.circles(), 4);
	}
}
