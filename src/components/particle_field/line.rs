//! Connecting lines between nearby particles.

use super::particle::Particle;

/// Geometry and opacity of a line element.
///
/// `length`, `left`, `top` and `angle` are only meaningful while `opacity > 0`;
/// a hidden line keeps whatever geometry it last had.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineGeometry {
	/// Line length in viewport percent.
	pub length: f64,
	/// Origin (first particle) in viewport percent.
	pub left: f64,
	pub top: f64,
	/// Degrees, measured from the first particle towards the second.
	pub angle: f64,
	pub opacity: f64,
}

impl LineGeometry {
	pub fn is_visible(&self) -> bool {
		self.opacity > 0.0
	}
}

/// Line between two particles of the same field, referenced by index.
///
/// Lines never own particles; the field that owns both particles owns the line.
#[derive(Clone, Debug)]
pub struct ParticleLine {
	pub a: usize,
	pub b: usize,
	pub geometry: LineGeometry,
}

impl ParticleLine {
	pub fn new(a: usize, b: usize) -> Self {
		Self {
			a,
			b,
			geometry: LineGeometry::default(),
		}
	}

	/// Recompute from the current particle positions.
	///
	/// Past `threshold` only the opacity is touched. Otherwise opacity falls off
	/// linearly from `base_opacity` at distance 0 to 0 at `threshold`. A
	/// non-positive threshold hides every line.
	pub fn update(&mut self, particles: &[Particle], threshold: f64, base_opacity: f64) {
		let (p1, p2) = (&particles[self.a], &particles[self.b]);
		let (dx, dy) = (p2.x - p1.x, p2.y - p1.y);
		let distance = (dx * dx + dy * dy).sqrt();

		if threshold <= 0.0 || distance > threshold {
			self.geometry.opacity = 0.0;
			return;
		}

		self.geometry = LineGeometry {
			length: distance,
			left: p1.x,
			top: p1.y,
			angle: dy.atan2(dx).to_degrees(),
			opacity: base_opacity * (1.0 - distance / threshold),
		};
	}
}

#[cfg(test)]
mod tests {
	use fastrand::Rng;

	use super::*;
	use crate::components::theme::ThemeMode;

	fn pair(a: (f64, f64), b: (f64, f64)) -> Vec<Particle> {
		let mut rng = Rng::with_seed(42);
		[a, b]
			.into_iter()
			.map(|(x, y)| {
				let mut p = Particle::spawn(&mut rng, ThemeMode::Dark);
				p.x = x;
				p.y = y;
				p
			})
			.collect()
	}

	#[test]
	fn opacity_falls_off_linearly_within_threshold() {
		let particles = pair((0.0, 0.0), (10.0, 0.0));
		let mut line = ParticleLine::new(0, 1);
		line.update(&particles, 15.0, 0.15);

		let expected = 0.15 * (1.0 - 10.0 / 15.0);
		assert!((line.geometry.opacity - expected).abs() < 1e-12);
		assert!((line.geometry.opacity - 0.05).abs() < 1e-9);
		assert_eq!(line.geometry.length, 10.0);
		assert_eq!((line.geometry.left, line.geometry.top), (0.0, 0.0));
		assert_eq!(line.geometry.angle, 0.0);
		assert!(line.geometry.is_visible());
	}

	#[test]
	fn hidden_past_threshold() {
		let particles = pair((0.0, 0.0), (20.0, 0.0));
		let mut line = ParticleLine::new(0, 1);
		line.update(&particles, 15.0, 0.15);
		assert_eq!(line.geometry.opacity, 0.0);
		assert!(!line.geometry.is_visible());
	}

	#[test]
	fn hiding_keeps_last_geometry() {
		let mut particles = pair((0.0, 0.0), (0.0, 5.0));
		let mut line = ParticleLine::new(0, 1);
		line.update(&particles, 15.0, 0.15);
		assert!((line.geometry.angle - 90.0).abs() < 1e-9);

		particles[1].y = 40.0;
		line.update(&particles, 15.0, 0.15);
		assert_eq!(line.geometry.opacity, 0.0);
		assert_eq!(line.geometry.length, 5.0);
		assert!((line.geometry.angle - 90.0).abs() < 1e-9);
	}

	#[test]
	fn exactly_at_threshold_is_transparent() {
		let particles = pair((10.0, 10.0), (19.0, 22.0));
		let mut line = ParticleLine::new(0, 1);
		line.update(&particles, 15.0, 0.15);
		assert_eq!(line.geometry.length, 15.0);
		assert_eq!(line.geometry.opacity, 0.0);
	}

	#[test]
	fn zero_threshold_hides_coincident_particles() {
		let particles = pair((30.0, 30.0), (30.0, 30.0));
		let mut line = ParticleLine::new(0, 1);
		line.update(&particles, 0.0, 0.15);
		assert_eq!(line.geometry.opacity, 0.0);
		assert!(!line.geometry.opacity.is_nan());
	}

	#[test]
	fn opacity_decreases_with_distance() {
		let mut last = f64::INFINITY;
		for step in 0..=30 {
			let d = step as f64;
			let particles = pair((50.0, 50.0), (50.0 - d, 50.0));
			let mut line = ParticleLine::new(0, 1);
			line.update(&particles, 15.0, 0.15);
			assert!(line.geometry.opacity <= last);
			assert!(line.geometry.opacity >= 0.0);
			last = line.geometry.opacity;
		}
		assert_eq!(last, 0.0);
	}
}
