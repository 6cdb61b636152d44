//! [`RenderSurface`] backed by absolutely-positioned `div`s.
//!
//! Each particle is a `div.particle.<shape>`, each line a `div.particle-line`,
//! all appended to the background container. Shapes and base appearance come
//! from the page stylesheet; this module only writes per-frame inline styles.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::field::ParticleField;
use super::line::LineGeometry;
use super::particle::SpriteStyle;
use super::surface::RenderSurface;

/// Renders a field as DOM elements inside `container`.
pub struct DomSurface {
	document: Document,
	container: Element,
	particles: Vec<HtmlElement>,
	lines: Vec<HtmlElement>,
}

impl DomSurface {
	pub fn new(document: Document, container: Element) -> Self {
		Self {
			document,
			container,
			particles: Vec::new(),
			lines: Vec::new(),
		}
	}

	fn create_div(&self, class: &str) -> Option<HtmlElement> {
		let el: HtmlElement = self.document.create_element("div").ok()?.dyn_into().ok()?;
		el.set_class_name(class);
		self.container.append_child(&el).ok()?;
		Some(el)
	}
}

/// One element per item, in order. Stops at the first item whose element
/// cannot be created, so element `i` always belongs to item `i`.
fn create_aligned<I, T>(items: I, make: impl FnMut(I::Item) -> Option<T>) -> Vec<T>
where
	I: IntoIterator,
{
	items.into_iter().map_while(make).collect()
}

fn apply_sprite(el: &HtmlElement, sprite: &SpriteStyle) {
	let style = el.style();
	let _ = style.set_property("left", &format!("{}%", sprite.left));
	let _ = style.set_property("top", &format!("{}%", sprite.top));
	let _ = style.set_property("transform", &format!("rotate({}deg)", sprite.rotation));
}

fn apply_line(el: &HtmlElement, line: &LineGeometry) {
	let style = el.style();
	if !line.is_visible() {
		let _ = style.set_property("opacity", "0");
		return;
	}
	let _ = style.set_property("width", &format!("{}%", line.length));
	let _ = style.set_property("left", &format!("{}%", line.left));
	let _ = style.set_property("top", &format!("{}%", line.top));
	let _ = style.set_property("transform", &format!("rotate({}deg)", line.angle));
	let _ = style.set_property("opacity", &line.opacity.to_string());
}

impl RenderSurface for DomSurface {
	fn clear(&mut self) {
		self.container.set_inner_html("");
		self.particles.clear();
		self.lines.clear();
	}

	fn build(&mut self, field: &ParticleField) {
		self.particles = create_aligned(&field.particles, |p| {
			let sprite = p.style();
			let el = self.create_div(&format!("particle {}", p.shape.class_name()))?;
			let style = el.style();
			let size = format!("{}px", sprite.size);
			let _ = style.set_property("width", &size);
			let _ = style.set_property("height", &size);
			let _ = style.set_property("background-color", &sprite.color.to_css());
			Some(el)
		});

		self.lines = create_aligned(&field.lines, |_| {
			let el = self.create_div("particle-line")?;
			let style = el.style();
			let _ = style.set_property("transform-origin", "left center");
			let _ = style.set_property("opacity", "0");
			Some(el)
		});
	}

	fn present(&mut self, field: &ParticleField) {
		for (el, p) in self.particles.iter().zip(&field.particles) {
			apply_sprite(el, &p.style());
		}
		for (el, line) in self.lines.iter().zip(&field.lines) {
			apply_line(el, &line.geometry);
		}
	}

	fn recolor(&mut self, field: &ParticleField) {
		for (el, p) in self.particles.iter().zip(&field.particles) {
			let _ = el.style().set_property("background-color", &p.color.to_css());
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn creation_failure_keeps_elements_aligned() {
		let items = [10, 11, 12, 13, 14];
		let created = create_aligned(&items, |i| (*i != 13).then_some(*i * 2));
		assert_eq!(created, vec![20, 22, 24]);
		for (idx, el) in created.iter().enumerate() {
			assert_eq!(*el, items[idx] * 2);
		}
	}

	#[test]
	fn creates_every_element_when_nothing_fails() {
		let created = create_aligned(0..4, Some);
		assert_eq!(created, vec![0, 1, 2, 3]);
	}
}
