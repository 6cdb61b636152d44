//! The particle collection plus one line per particle pair.

use fastrand::Rng;

use super::config::FieldConfig;
use super::line::ParticleLine;
use super::particle::Particle;
use crate::components::theme::ThemeMode;

/// Owns every particle and every pairwise line for one page session.
///
/// Built wholesale by [`ParticleField::new`]; there is no incremental resize.
#[derive(Clone, Debug)]
pub struct ParticleField {
	pub particles: Vec<Particle>,
	pub lines: Vec<ParticleLine>,
	config: FieldConfig,
}

impl ParticleField {
	pub fn new(config: &FieldConfig, theme: ThemeMode, rng: &mut Rng) -> Self {
		let particles: Vec<Particle> = (0..config.particle_count)
			.map(|_| Particle::spawn(rng, theme))
			.collect();

		let mut lines = Vec::with_capacity(config.line_count());
		for i in 0..particles.len() {
			for j in (i + 1)..particles.len() {
				lines.push(ParticleLine::new(i, j));
			}
		}

		Self {
			particles,
			lines,
			config: config.clone(),
		}
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	/// Advance every particle, then recompute every line from the new positions.
	pub fn tick(&mut self, rng: &mut Rng) {
		for p in &mut self.particles {
			p.advance(rng);
		}
		let (threshold, opacity) = (self.config.connect_distance, self.config.line_opacity);
		for line in &mut self.lines {
			line.update(&self.particles, threshold, opacity);
		}
	}

	pub fn recolor(&mut self, theme: ThemeMode) {
		let color = theme.particle_color();
		for p in &mut self.particles {
			p.color = color;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::theme::{DARK_PARTICLE, LIGHT_PARTICLE};

	fn config(count: usize) -> FieldConfig {
		FieldConfig {
			particle_count: count,
			..FieldConfig::default()
		}
	}

	#[test]
	fn builds_one_line_per_pair() {
		let mut rng = Rng::with_seed(1);
		for n in [0, 1, 2, 5, 50] {
			let field = ParticleField::new(&config(n), ThemeMode::Dark, &mut rng);
			assert_eq!(field.particles.len(), n);
			assert_eq!(field.lines.len(), n * n.saturating_sub(1) / 2);
		}
	}

	#[test]
	fn lines_cover_each_unordered_pair_once() {
		let field = ParticleField::new(&config(6), ThemeMode::Dark, &mut Rng::with_seed(2));
		let mut pairs: Vec<(usize, usize)> = field.lines.iter().map(|l| (l.a, l.b)).collect();
		assert!(pairs.iter().all(|(a, b)| a < b && *b < 6));
		pairs.sort_unstable();
		pairs.dedup();
		assert_eq!(pairs.len(), 15);
	}

	#[test]
	fn tick_moves_particles_and_refreshes_lines() {
		let mut rng = Rng::with_seed(3);
		let mut field = ParticleField::new(&config(2), ThemeMode::Dark, &mut rng);
		field.particles[0].x = 40.0;
		field.particles[0].y = 40.0;
		field.particles[1].x = 45.0;
		field.particles[1].y = 40.0;
		let before: Vec<f64> = field.particles.iter().map(|p| p.y).collect();

		field.tick(&mut rng);

		for (p, y0) in field.particles.iter().zip(before) {
			assert!(p.y > y0);
		}
		let (p1, p2) = (&field.particles[0], &field.particles[1]);
		let distance = ((p2.x - p1.x).powi(2) + (p2.y - p1.y).powi(2)).sqrt();
		let line = &field.lines[0].geometry;
		assert!((line.length - distance).abs() < 1e-12);
		assert_eq!((line.left, line.top), (p1.x, p1.y));
		assert!(line.is_visible());
	}

	#[test]
	fn same_seed_same_field() {
		let a = ParticleField::new(&config(10), ThemeMode::Dark, &mut Rng::with_seed(77));
		let b = ParticleField::new(&config(10), ThemeMode::Dark, &mut Rng::with_seed(77));
		let xs = |f: &ParticleField| f.particles.iter().map(|p| p.x).collect::<Vec<_>>();
		assert_eq!(xs(&a), xs(&b));
	}

	#[test]
	fn recolor_applies_to_all_particles() {
		let mut field = ParticleField::new(&config(12), ThemeMode::Dark, &mut Rng::with_seed(4));
		assert!(field.particles.iter().all(|p| p.color == DARK_PARTICLE));
		field.recolor(ThemeMode::Light);
		assert!(field.particles.iter().all(|p| p.color == LIGHT_PARTICLE));
		field.recolor(ThemeMode::Dark);
		assert!(field.particles.iter().all(|p| p.color == DARK_PARTICLE));
	}
}
