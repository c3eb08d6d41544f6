//! Leptos components rendering the backdrop.
//!
//! [`AmbientParticles`] paints onto a canvas that fills its parent. The
//! animation loop runs via `requestAnimationFrame` and is torn down when the
//! component is cleaned up. [`FloatingMarkers`] lays out its dots only after
//! the client has mounted, and hands the motion to CSS animations.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fastrand::Rng;
use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::animator::Animator;
use super::markers::MarkerField;
use super::surface::SurfaceSize;
use super::theme::{MarkerStyle, Tone};
use super::types::{BackdropConfig, MarkerConfig};

/// Keeps a single `requestAnimationFrame` request in flight.
///
/// The callback reports whether it wants another frame. Cancelling (or
/// dropping) the loop cancels the pending request and releases the callback,
/// so nothing fires after unmount.
struct FrameLoop {
	callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	pending: Rc<Cell<Option<i32>>>,
	cancelled: Rc<Cell<bool>>,
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
	web_sys::window()?
		.request_animation_frame(cb.as_ref().unchecked_ref::<js_sys::Function>())
		.ok()
}

impl FrameLoop {
	fn start(mut on_frame: impl FnMut() -> bool + 'static) -> Self {
		let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
		let pending = Rc::new(Cell::new(None));
		let cancelled = Rc::new(Cell::new(false));
		let (callback_inner, pending_inner, cancelled_inner) =
			(callback.clone(), pending.clone(), cancelled.clone());

		*callback.borrow_mut() = Some(Closure::new(move || {
			pending_inner.set(None);
			if cancelled_inner.get() || !on_frame() {
				return;
			}
			if let Some(ref cb) = *callback_inner.borrow() {
				pending_inner.set(request_frame(cb));
			}
		}));
		if let Some(ref cb) = *callback.borrow() {
			pending.set(request_frame(cb));
		}

		Self {
			callback,
			pending,
			cancelled,
		}
	}

	fn cancel(&self) {
		if self.cancelled.replace(true) {
			return;
		}
		if let (Some(id), Some(window)) = (self.pending.take(), web_sys::window()) {
			let _ = window.cancel_animation_frame(id);
		}
		// Breaks the closure's reference to itself.
		self.callback.borrow_mut().take();
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.cancel();
	}
}

/// A window event listener removed on drop.
struct WindowListener {
	event: &'static str,
	callback: Closure<dyn FnMut()>,
}

impl WindowListener {
	fn add(event: &'static str, handler: impl FnMut() + 'static) -> Option<Self> {
		let callback = Closure::<dyn FnMut()>::new(handler);
		web_sys::window()?
			.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
			.ok()?;
		Some(Self { event, callback })
	}
}

impl Drop for WindowListener {
	fn drop(&mut self) {
		if let Some(window) = web_sys::window() {
			let _ = window
				.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
		}
	}
}

/// Everything a mounted particle backdrop holds on to.
///
/// Dropping it stops the animator, cancels the frame loop and detaches the
/// resize listener.
struct MountedBackdrop {
	animator: Rc<RefCell<Animator<CanvasRenderingContext2d>>>,
	frames: FrameLoop,
	_resize: Option<WindowListener>,
}

impl Drop for MountedBackdrop {
	fn drop(&mut self) {
		self.frames.cancel();
		self.animator.borrow_mut().stop();
	}
}

fn measure(canvas: &HtmlCanvasElement) -> SurfaceSize {
	let rect = canvas.get_bounding_client_rect();
	SurfaceSize::new(rect.width(), rect.height())
}

/// Size the backing store to the element's layout size.
///
/// Returns the backing store's pixel size, which bounds the particles.
fn fit_canvas(canvas: &HtmlCanvasElement) -> SurfaceSize {
	let backing = measure(canvas).backing();
	canvas.set_width(backing.width as u32);
	canvas.set_height(backing.height as u32);
	SurfaceSize::new(canvas.width() as f64, canvas.height() as f64)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()?
		.dyn_into::<CanvasRenderingContext2d>()
		.ok()
}

fn mount_particles(canvas: HtmlCanvasElement, config: BackdropConfig) -> Option<MountedBackdrop> {
	let size = fit_canvas(&canvas);
	let Some(ctx) = context_2d(&canvas) else {
		debug!("ambient-backdrop: no 2d context, skipping");
		return None;
	};

	let mut animator = Animator::new(config);
	if !animator.mount(ctx, size, &mut Rng::new()) {
		return None;
	}
	let animator = Rc::new(RefCell::new(animator));

	let animator_resize = animator.clone();
	let resize = WindowListener::add("resize", move || {
		let size = fit_canvas(&canvas);
		animator_resize.borrow_mut().resize(size);
	});

	let animator_frame = animator.clone();
	let frames = FrameLoop::start(move || animator_frame.borrow_mut().frame());

	Some(MountedBackdrop {
		animator,
		frames,
		_resize: resize,
	})
}

/// Drifting particles painted on a canvas behind the page content.
///
/// The canvas fills its positioned parent and ignores pointer events. Nothing
/// is drawn until the canvas has a measurable size.
#[component]
pub fn AmbientParticles(
	#[prop(default = Tone::Dark)] color: Tone,
	#[prop(default = 50)] count: usize,
	#[prop(default = 2.0)] size: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mounted = StoredValue::new_local(None::<MountedBackdrop>);
	let config = BackdropConfig { color, count, size };

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		// Replacing a previous mount drops (and stops) it.
		mounted.set_value(mount_particles(canvas, config.clone()));
	});

	on_cleanup(move || {
		let _ = mounted.try_update_value(|slot| slot.take());
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="ambient-particles"
			aria-hidden="true"
			style="position: absolute; inset: 0; width: 100%; height: 100%; pointer-events: none;"
		/>
	}
}

static MARKER_INSTANCES: AtomicUsize = AtomicUsize::new(0);

fn viewport_size(window: &Window) -> Option<SurfaceSize> {
	Some(SurfaceSize::new(
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Small dots drifting back and forth across the viewport.
///
/// Renders nothing until the client is ready and the viewport is known.
#[component]
pub fn FloatingMarkers(#[prop(default = 8)] count: usize) -> impl IntoView {
	let count = MarkerConfig { count }.validated().count;
	let markers = RwSignal::new(MarkerField::default());
	let prefix = format!(
		"ambient-marker-{}",
		MARKER_INSTANCES.fetch_add(1, Ordering::Relaxed)
	);

	Effect::new(move |_| {
		let viewport = web_sys::window().as_ref().and_then(viewport_size);
		let field = MarkerField::new(viewport, count, &mut Rng::new());
		debug!("ambient-backdrop: laid out {} markers", field.markers.len());
		markers.set(field);
	});

	let style = MarkerStyle::default();
	let dot = format!(
		"position: absolute; left: 0; top: 0; width: {0}px; height: {0}px; border-radius: 9999px; background: {1};",
		style.size,
		style.color.to_css()
	);

	move || {
		let field = markers.get();
		if field.is_empty() {
			return None;
		}
		let css = field.stylesheet(&prefix);
		let dots = field
			.markers
			.iter()
			.enumerate()
			.map(|(i, m)| {
				let style = format!("{dot} {}", m.animation_style(&format!("{prefix}-{i}")));
				view! { <div class="floating-marker" style=style /> }
			})
			.collect_view();
		Some(view! {
			<div
				class="floating-markers"
				aria-hidden="true"
				style="position: absolute; inset: 0; overflow: hidden; pointer-events: none;"
			>
				<style>{css}</style>
				{dots}
			</div>
		})
	}
}
