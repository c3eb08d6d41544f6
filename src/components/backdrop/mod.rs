//! Ambient animated backdrop for static pages.
//!
//! Two decorative layers, meant to sit behind page content:
//! - [`AmbientParticles`]: dots drifting on a canvas and bouncing off its edges
//! - [`FloatingMarkers`]: a handful of dots gliding between random points
//!
//! Both start when mounted and stop when cleaned up. Neither reacts to input.
//!
//! # Example
//!
//! ```ignore
//! use ambient_backdrop::{AmbientParticles, FloatingMarkers, Tone};
//!
//! view! {
//!     <section style="position: relative;">
//!         <FloatingMarkers />
//!         <AmbientParticles color=Tone::Light count=40 size=2.0 />
//!         <h1>"Content"</h1>
//!     </section>
//! }
//! ```

mod animator;
mod component;
pub mod markers;
pub mod particles;
mod surface;
pub mod theme;
mod types;

pub use animator::{Animator, Phase};
pub use component::{AmbientParticles, FloatingMarkers};
pub use surface::{DrawSurface, SurfaceSize};
pub use theme::Tone;
pub use types::{BackdropConfig, MarkerConfig, PageBackdrop};
