//! Browser wiring for the particle background.
//!
//! Looks up the container, builds a [`FrameLoop`] over a [`DomSurface`], and
//! drives it from `requestAnimationFrame`. A single `resize` listener rebuilds
//! the field in place.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fastrand::Rng;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::config::PageConfig;
use super::dom_surface::DomSurface;
use super::frame_loop::FrameLoop;
use crate::components::theme::ThemeMode;

type SharedLoop = Rc<RefCell<FrameLoop<DomSurface>>>;
type SharedCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A mounted, animating particle background.
///
/// Dropping this removes the resize listener; the animation callback keeps
/// itself alive and stops re-requesting frames once the loop is stopped.
pub struct ParticleBackground {
	frame_loop: SharedLoop,
	animate: SharedCallback,
	frame_pending: Rc<Cell<bool>>,
	resize_cb: Closure<dyn FnMut()>,
}

fn request_frame(animate: &SharedCallback, frame_pending: &Cell<bool>) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Some(ref cb) = *animate.borrow() {
		if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
			frame_pending.set(true);
		}
	}
}

/// Mount the background into the configured container and start animating.
///
/// Returns `None` without touching the page if the container does not exist.
pub fn mount(config: &PageConfig, theme: ThemeMode, rng: Rng) -> Option<ParticleBackground> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let Some(container) = document.get_element_by_id(&config.container_id) else {
		debug!("snowdrift: no #{} container, skipping particles", config.container_id);
		return None;
	};

	let surface = DomSurface::new(document, container);
	let frame_loop: SharedLoop = Rc::new(RefCell::new(FrameLoop::new(&config.field, theme, surface, rng)));
	info!(
		"snowdrift: mounted {} particles, {} lines",
		config.field.particle_count,
		config.field.line_count()
	);

	let animate: SharedCallback = Rc::new(RefCell::new(None));
	let frame_pending = Rc::new(Cell::new(false));
	let (loop_anim, animate_inner, pending_anim) =
		(frame_loop.clone(), animate.clone(), frame_pending.clone());
	*animate.borrow_mut() = Some(Closure::new(move || {
		pending_anim.set(false);
		let produced = loop_anim.borrow_mut().tick();
		if produced {
			request_frame(&animate_inner, &pending_anim);
		}
	}));

	let loop_resize = frame_loop.clone();
	let resize_cb: Closure<dyn FnMut()> = Closure::new(move || {
		loop_resize.borrow_mut().rebuild();
	});
	let _ = window.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());

	let background = ParticleBackground {
		frame_loop,
		animate,
		frame_pending,
		resize_cb,
	};
	background.start();
	Some(background)
}

impl ParticleBackground {
	/// Resume animating. Safe to call while already running.
	pub fn start(&self) {
		self.frame_loop.borrow_mut().start();
		if !self.frame_pending.get() {
			request_frame(&self.animate, &self.frame_pending);
		}
	}

	/// Stop after the current frame; the field keeps its state.
	pub fn stop(&self) {
		self.frame_loop.borrow_mut().stop();
	}

	/// Whether frames are still being requested.
	pub fn is_running(&self) -> bool {
		self.frame_loop.borrow().is_running()
	}

	/// Tint every particle for `theme`; later rebuilds use it too.
	pub fn recolor(&self, theme: ThemeMode) {
		self.frame_loop.borrow_mut().recolor(theme);
	}

	/// Rebuild as if the viewport had been resized.
	pub fn rebuild(&self) {
		self.frame_loop.borrow_mut().rebuild();
	}

	/// Particles in the current field.
	pub fn particle_count(&self) -> usize {
		self.frame_loop.borrow().field().particles.len()
	}

	/// Lines in the current field.
	pub fn line_count(&self) -> usize {
		self.frame_loop.borrow().field().lines.len()
	}
}

impl Drop for ParticleBackground {
	fn drop(&mut self) {
		self.stop();
		if let Some(window) = web_sys::window() {
			let _ = window
				.remove_event_listener_with_callback("resize", self.resize_cb.as_ref().unchecked_ref());
		}
	}
}
