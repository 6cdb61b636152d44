//! Per-frame driver for a particle field.
//!
//! The loop itself never schedules anything: the browser adapter calls
//! [`FrameLoop::tick`] from `requestAnimationFrame`, and tests call it directly.

use fastrand::Rng;
use log::debug;

use super::config::FieldConfig;
use super::field::ParticleField;
use super::surface::RenderSurface;
use crate::components::theme::ThemeMode;

/// Couples a field with its surface and random source.
///
/// Rebuilds and ticks both take `&mut self`, so a rebuild can never land in
/// the middle of a frame.
pub struct FrameLoop<S: RenderSurface> {
	field: ParticleField,
	surface: S,
	rng: Rng,
	theme: ThemeMode,
	running: bool,
}

impl<S: RenderSurface> FrameLoop<S> {
	/// Build the initial field and draw it. The loop starts stopped.
	pub fn new(config: &FieldConfig, theme: ThemeMode, mut surface: S, mut rng: Rng) -> Self {
		let field = ParticleField::new(config, theme, &mut rng);
		surface.clear();
		surface.build(&field);
		surface.present(&field);

		Self {
			field,
			surface,
			rng,
			theme,
			running: false,
		}
	}

	pub fn start(&mut self) {
		self.running = true;
	}

	pub fn stop(&mut self) {
		self.running = false;
	}

	pub fn is_running(&self) -> bool {
		self.running
	}

	pub fn field(&self) -> &ParticleField {
		&self.field
	}

	#[cfg(test)]
	pub fn surface(&self) -> &S {
		&self.surface
	}

	#[cfg(test)]
	pub fn theme(&self) -> ThemeMode {
		self.theme
	}

	/// Advance one frame. Returns whether a frame was produced; a stopped
	/// loop leaves everything untouched.
	pub fn tick(&mut self) -> bool {
		if !self.running {
			return false;
		}
		self.field.tick(&mut self.rng);
		self.surface.present(&self.field);
		true
	}

	/// Throw away the field and its elements and build a fresh one.
	///
	/// Used on viewport resize; nothing carries over except the particle
	/// count, the current theme and the running flag.
	pub fn rebuild(&mut self) {
		let config = self.field.config().clone();
		self.surface.clear();
		self.field = ParticleField::new(&config, self.theme, &mut self.rng);
		self.surface.build(&self.field);
		self.surface.present(&self.field);
		debug!(
			"snowdrift: rebuilt field ({} particles, {} lines)",
			self.field.particles.len(),
			self.field.lines.len()
		);
	}

	pub fn recolor(&mut self, theme: ThemeMode) {
		self.theme = theme;
		self.field.recolor(theme);
		self.surface.recolor(&self.field);
	}
}
