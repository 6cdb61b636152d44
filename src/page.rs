//! Page controller: owns the background and page state for the session.
//!
//! The controller lives in a thread-local because the entry points are plain
//! JS globals (`showTab`, `toggleTheme`) called from inline `onclick` handlers.

use std::cell::RefCell;

use fastrand::Rng;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::components::page_chrome::{PageState, dom};
use crate::components::particle_field::{self, PageConfig, ParticleBackground};
use crate::load_config;

struct PageController {
	state: PageState,
	background: Option<ParticleBackground>,
}

thread_local! {
	static PAGE: RefCell<Option<PageController>> = const { RefCell::new(None) };
}

fn document() -> Option<Document> {
	web_sys::window()?.document()
}

/// Seed from the JS RNG; `fastrand`'s own entropy source is unavailable on
/// `wasm32-unknown-unknown` without extra features.
fn seeded_rng() -> Rng {
	Rng::with_seed((js_sys::Math::random() * u64::MAX as f64) as u64)
}

/// Current page state, or one read from the DOM before [`start`] has run.
fn current_state(document: &Document) -> PageState {
	PAGE.with(|cell| cell.borrow().as_ref().map(|page| page.state.clone()))
		.unwrap_or_else(|| PageState::new(dom::read_theme(document)))
}

fn store_state(state: PageState) {
	PAGE.with(|cell| {
		if let Some(page) = cell.borrow_mut().as_mut() {
			page.state = state;
		}
	});
}

/// Show the section with id `target` and hide all others.
pub fn show_tab(target: &str) {
	let Some(document) = document() else {
		return;
	};
	let snapshot = dom::snapshot_tabs(&document);
	let current = current_state(&document);
	debug!("snowdrift: tab {:?} -> {}", current.active_section, target);
	let (next, presentation) = current.show_tab(&snapshot, target);
	if presentation.active_link.is_none() {
		debug!("snowdrift: no nav link matches {}", target);
	}
	dom::apply_tabs(&document, &presentation);
	store_state(next);
}

/// Flip between light and dark mode, recoloring the particles.
pub fn toggle_theme() {
	let Some(document) = document() else {
		return;
	};
	let (next, presentation) = current_state(&document).toggle_theme();
	dom::apply_theme(&document, &presentation);
	PAGE.with(|cell| {
		if let Some(page) = cell.borrow_mut().as_mut() {
			if let Some(background) = &page.background {
				background.recolor(next.theme);
			}
		}
	});
	debug!("snowdrift: theme now {:?}", next.theme);
	store_state(next);
}

/// Mount the background and show the default section.
fn start(config: PageConfig) {
	let Some(document) = document() else {
		return;
	};
	let theme = dom::read_theme(&document);
	let background = particle_field::mount(&config, theme, seeded_rng());

	// Replacing a previous controller drops its background, which stops it.
	PAGE.with(|cell| {
		*cell.borrow_mut() = Some(PageController {
			state: PageState::new(theme),
			background,
		});
	});

	show_tab(&config.default_tab);
}

fn publish_globals(window: &Window) {
	let show: Closure<dyn Fn(String)> = Closure::new(|id: String| show_tab(&id));
	let toggle: Closure<dyn Fn()> = Closure::new(toggle_theme);
	let _ = js_sys::Reflect::set(window, &JsValue::from_str("showTab"), show.as_ref());
	let _ = js_sys::Reflect::set(window, &JsValue::from_str("toggleTheme"), toggle.as_ref());
	// Page-lifetime callbacks.
	show.forget();
	toggle.forget();
}

fn ready_state(document: &Document) -> Option<String> {
	js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
		.ok()?
		.as_string()
}

/// Publish the JS globals and start once the DOM is ready.
pub fn boot() {
	let Some(window) = web_sys::window() else {
		return;
	};
	let Some(document) = window.document() else {
		return;
	};
	publish_globals(&window);

	if ready_state(&document).as_deref() == Some("loading") {
		let on_ready = Closure::once_into_js(|| start(load_config()));
		let _ = document
			.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
		info!("snowdrift: waiting for DOMContentLoaded");
	} else {
		start(load_config());
	}
}
