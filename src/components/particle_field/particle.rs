//! Drifting snowflake-style particles.
//!
//! Coordinates are percentages of the viewport. Motion is fixed-step: one call
//! to [`Particle::advance`] per displayed frame, independent of elapsed time.

use std::f64::consts::TAU;

use fastrand::Rng;

use crate::components::theme::{Color, ThemeMode};

/// Vertical position new and recycled particles start from (just above the viewport).
pub const SPAWN_Y: f64 = -10.0;
/// Particles at or below this vertical position are recycled to [`SPAWN_Y`].
pub const BOTTOM_BOUND: f64 = 110.0;
/// Particles drifting past the left bound reappear at the right bound.
pub const LEFT_BOUND: f64 = -10.0;
/// Particles drifting past the right bound reappear at the left bound.
pub const RIGHT_BOUND: f64 = 110.0;

const PHASE_STEP: f64 = 0.02;
const SWAY_SCALE: f64 = 0.1;
/// Peak tilt in degrees.
const MAX_TILT: f64 = 15.0;

/// Visual shape; rendered as a CSS class on the particle element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
	Circle,
	Square,
	Triangle,
	Diamond,
	Star,
}

impl Shape {
	/// All shapes, in draw order.
	pub const ALL: [Shape; 5] = [
		Shape::Circle,
		Shape::Square,
		Shape::Triangle,
		Shape::Diamond,
		Shape::Star,
	];

	pub fn random(rng: &mut Rng) -> Self {
		Self::ALL[rng.usize(..Self::ALL.len())]
	}

	pub fn class_name(self) -> &'static str {
		match self {
			Shape::Circle => "circle",
			Shape::Square => "square",
			Shape::Triangle => "triangle",
			Shape::Diamond => "diamond",
			Shape::Star => "star",
		}
	}
}

/// Styling instructions for one particle element.
#[derive(Clone, Debug, PartialEq)]
pub struct SpriteStyle {
	/// Left offset in viewport percent.
	pub left: f64,
	/// Top offset in viewport percent.
	pub top: f64,
	/// Edge length in pixels.
	pub size: f64,
	/// Rotation in degrees.
	pub rotation: f64,
	pub color: Color,
}

/// A single falling particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub speed_x: f64,
	pub speed_y: f64,
	/// Sway amplitude multiplier.
	pub amplitude: f64,
	pub phase: f64, // Oscillator driving sway and tilt
	/// Degrees.
	pub rotation: f64,
	/// Drawn at spawn for each particle; tilt currently follows `phase` only.
	#[allow(dead_code, reason = "kept so spawn draws stay in the page's order")]
	pub rotation_speed: f64,
	pub shape: Shape,
	pub color: Color,
}

impl Particle {
	/// Spawn a particle above the viewport with randomized motion, tinted for `theme`.
	pub fn spawn(rng: &mut Rng, theme: ThemeMode) -> Self {
		let shape = Shape::random(rng);
		let size = rng.f64() * 20.0 + 20.0;
		let x = rng.f64() * 100.0;
		let speed_x = (rng.f64() - 0.5) * 0.5;
		let speed_y = rng.f64() * 0.5 + 0.5;
		let amplitude = rng.f64() * 2.0 + 1.0;
		let phase = rng.f64() * TAU;
		let rotation = rng.f64() * 360.0;
		let rotation_speed = (rng.f64() - 0.5) * 4.0;

		Self {
			x,
			y: SPAWN_Y,
			size,
			speed_x,
			speed_y,
			amplitude,
			phase,
			rotation,
			rotation_speed,
			shape,
			color: theme.particle_color(),
		}
	}

	/// Advance one frame: sway, fall, tilt, then apply wrap-around.
	///
	/// `rng` is only consulted when the particle is recycled to the top.
	pub fn advance(&mut self, rng: &mut Rng) {
		self.phase += PHASE_STEP;

		let sway = self.phase.sin();
		self.x += self.speed_x + sway * SWAY_SCALE * self.amplitude;
		self.y += self.speed_y;
		self.rotation = sway * MAX_TILT;

		self.wrap(rng);
	}

	fn wrap(&mut self, rng: &mut Rng) {
		if self.y >= BOTTOM_BOUND {
			self.y = SPAWN_Y;
			self.x = rng.f64() * 100.0;
		}
		if self.x < LEFT_BOUND {
			self.x = RIGHT_BOUND;
		}
		if self.x > RIGHT_BOUND {
			self.x = LEFT_BOUND;
		}
	}

	pub fn style(&self) -> SpriteStyle {
		SpriteStyle {
			left: self.x,
			top: self.y,
			size: self.size,
			rotation: self.rotation,
			color: self.color,
		}
	}
}
