//! Reads page snapshots from the DOM and writes presentations back.

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions};

use super::tabs::{TabPresentation, TabSnapshot};
use crate::components::theme::{ThemeMode, ThemePresentation};

/// Delay before a newly shown section fades back in.
const FADE_IN_DELAY_MS: i32 = 50;

fn html_elements(list: NodeList) -> Vec<HtmlElement> {
	(0..list.length())
		.filter_map(|i| list.get(i))
		.filter_map(|node| node.dyn_into::<HtmlElement>().ok())
		.collect()
}

fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
	document
		.query_selector_all(selector)
		.map(html_elements)
		.unwrap_or_default()
}

pub fn read_theme(document: &Document) -> ThemeMode {
	let light = document
		.body()
		.map(|body| body.class_list().contains("light"))
		.unwrap_or(false);
	ThemeMode::from_light_class(light)
}

pub fn snapshot_tabs(document: &Document) -> TabSnapshot {
	TabSnapshot {
		sections: query_all(document, "main section")
			.iter()
			.map(|s| s.id())
			.collect(),
		nav_links: query_all(document, ".nav-link")
			.iter()
			.map(|l| l.text_content().unwrap_or_default())
			.collect(),
	}
}

fn fade_in_later(section: HtmlElement) {
	let Some(window) = web_sys::window() else {
		let _ = section.style().set_property("opacity", "1");
		return;
	};
	let cb = Closure::once_into_js(move || {
		let _ = section.style().set_property("opacity", "1");
	});
	let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
		cb.unchecked_ref(),
		FADE_IN_DELAY_MS,
	);
}

/// Apply a tab selection. Sections and links are re-queried, matching the
/// snapshot by document order.
pub fn apply_tabs(document: &Document, presentation: &TabPresentation) {
	let sections = query_all(document, "main section");
	for (el, (_, active)) in sections.into_iter().zip(&presentation.sections) {
		if *active {
			let _ = el.style().set_property("opacity", "0");
			let _ = el.class_list().add_1("active");
			fade_in_later(el);
		} else {
			let _ = el.class_list().remove_1("active");
		}
	}

	let links = query_all(document, ".nav-link");
	for link in &links {
		let _ = link.class_list().remove_1("active");
	}
	if let Some(link) = presentation.active_link.and_then(|i| links.get(i)) {
		let _ = link.class_list().add_1("active");
	}

	if let Some(window) = web_sys::window() {
		let options = ScrollToOptions::new();
		options.set_top(0.0);
		options.set_behavior(ScrollBehavior::Smooth);
		window.scroll_to_with_scroll_to_options(&options);
	}
}

fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
	document.get_element_by_id(id)?.dyn_into().ok()
}

/// Apply theme chrome: body class, nav link color and the theme icons.
///
/// Particle recoloring is handled by the particle background itself.
pub fn apply_theme(document: &Document, presentation: &ThemePresentation) {
	if let Some(body) = document.body() {
		let _ = body
			.class_list()
			.toggle_with_force("light", presentation.body_light);
	}

	for link in query_all(document, ".nav-link") {
		let _ = link.style().set_property("color", presentation.nav_link_color);
	}

	if let Some(icon_lg) = html_by_id(document, "themeIcon-lg") {
		icon_lg.set_class_name(presentation.icon_lg_class);
		let _ = icon_lg.style().set_property("color", presentation.icon_lg_color);
	}

	if let (Some(icon), Some(text)) = (
		document.get_element_by_id("themeIcon"),
		document.get_element_by_id("themeText"),
	) {
		icon.set_class_name(presentation.icon_class);
		text.set_text_content(Some(presentation.toggle_text));
	}
}
