//! Display seam between the particle model and whatever shows it.

use super::field::ParticleField;

/// Something a [`ParticleField`] can be drawn onto.
///
/// Implementations keep one visual element per particle and per line, in the
/// same order as the field's collections.
pub trait RenderSurface {
	/// Drop every element created by a previous [`RenderSurface::build`].
	fn clear(&mut self);

	/// Create elements for a freshly built field.
	fn build(&mut self, field: &ParticleField);

	/// Write the field's current state to the existing elements.
	fn present(&mut self, field: &ParticleField);

	/// Write only particle colors, after a theme change.
	fn recolor(&mut self, field: &ParticleField) {
		self.present(field);
	}
}

/// Records surface calls, for driving a frame loop without a DOM.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
	pub clears: usize,
	pub builds: usize,
	pub presents: usize,
	pub recolors: usize,
	pub particles: usize,
	pub lines: usize,
	pub colors: Vec<String>,
}

#[cfg(test)]
impl RenderSurface for RecordingSurface {
	fn clear(&mut self) {
		self.clears += 1;
		self.particles = 0;
		self.lines = 0;
		self.colors.clear();
	}

	fn build(&mut self, field: &ParticleField) {
		self.builds += 1;
		self.particles = field.particles.len();
		self.lines = field.lines.len();
	}

	fn present(&mut self, field: &ParticleField) {
		self.presents += 1;
		self.colors = field.particles.iter().map(|p| p.color.to_css()).collect();
	}

	fn recolor(&mut self, field: &ParticleField) {
		self.recolors += 1;
		self.colors = field.particles.iter().map(|p| p.color.to_css()).collect();
	}
}
