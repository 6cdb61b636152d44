//! Tunables for the particle field and page bootstrap.
//!
//! Defaults match the look of the original page. Any of them can be overridden
//! by an embedded `<script id="snowdrift-config" type="application/json">` block;
//! omitted keys keep their default.

use log::warn;
use serde::Deserialize;

/// Number of particles spawned per field.
pub const DEFAULT_PARTICLE_COUNT: usize = 50;
/// Maximum distance (viewport percent) at which two particles are connected.
pub const DEFAULT_CONNECT_DISTANCE: f64 = 15.0;
/// Line opacity at zero distance; falls off linearly to 0 at the threshold.
pub const DEFAULT_LINE_OPACITY: f64 = 0.15;
/// Element id of the container particles are rendered into.
pub const DEFAULT_CONTAINER_ID: &str = "particles-bg";
/// Section shown once the page is ready.
pub const DEFAULT_TAB: &str = "videosTab";

/// Particle field configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
	/// Particles per field; lines are derived from every pair.
	pub particle_count: usize,
	/// Lines between particles further apart than this are hidden.
	pub connect_distance: f64,
	/// Opacity of a line between coincident particles.
	pub line_opacity: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			particle_count: DEFAULT_PARTICLE_COUNT,
			connect_distance: DEFAULT_CONNECT_DISTANCE,
			line_opacity: DEFAULT_LINE_OPACITY,
		}
	}
}

impl FieldConfig {
	/// Number of lines a field with this config holds (one per unordered pair).
	pub fn line_count(&self) -> usize {
		let n = self.particle_count;
		n * n.saturating_sub(1) / 2
	}

	/// Replace values the falloff cannot use with their defaults.
	fn sanitized(mut self) -> Self {
		if !(self.connect_distance.is_finite() && self.connect_distance > 0.0) {
			warn!(
				"snowdrift: connect_distance {} must be positive, using {}",
				self.connect_distance, DEFAULT_CONNECT_DISTANCE
			);
			self.connect_distance = DEFAULT_CONNECT_DISTANCE;
		}
		if !(0.0..=1.0).contains(&self.line_opacity) {
			warn!(
				"snowdrift: line_opacity {} outside [0, 1], using {}",
				self.line_opacity, DEFAULT_LINE_OPACITY
			);
			self.line_opacity = DEFAULT_LINE_OPACITY;
		}
		self
	}
}

/// Page-level configuration: where to render and what to show first.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
	/// Id of the element particles are rendered into.
	pub container_id: String,
	/// Section id passed to the tab switcher on page-ready.
	pub default_tab: String,
	/// Particle field tunables.
	pub field: FieldConfig,
}

impl Default for PageConfig {
	fn default() -> Self {
		Self {
			container_id: DEFAULT_CONTAINER_ID.to_string(),
			default_tab: DEFAULT_TAB.to_string(),
			field: FieldConfig::default(),
		}
	}
}

impl PageConfig {
	/// Parse a JSON config block. Missing keys, and field tunables the falloff
	/// cannot use, fall back to their defaults.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		let mut config: Self = serde_json::from_str(text)?;
		config.field = config.field.sanitized();
		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_yields_defaults() {
		let config = PageConfig::from_json("{}").unwrap();
		assert_eq!(config, PageConfig::default());
		assert_eq!(config.field.particle_count, 50);
		assert_eq!(config.field.connect_distance, 15.0);
		assert_eq!(config.field.line_opacity, 0.15);
	}

	#[test]
	fn partial_override_keeps_other_defaults() {
		let config =
			PageConfig::from_json(r#"{ "default_tab": "aboutTab", "field": { "particle_count": 8 } }"#)
				.unwrap();
		assert_eq!(config.default_tab, "aboutTab");
		assert_eq!(config.container_id, "particles-bg");
		assert_eq!(config.field.particle_count, 8);
		assert_eq!(config.field.connect_distance, DEFAULT_CONNECT_DISTANCE);
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(PageConfig::from_json("{ particle_count: ").is_err());
	}

	#[test]
	fn unusable_falloff_falls_back_to_defaults() {
		for distance in ["0", "-3.5"] {
			let json = format!(r#"{{ "field": {{ "connect_distance": {distance}, "line_opacity": 2.0 }} }}"#);
			let config = PageConfig::from_json(&json).unwrap();
			assert_eq!(config.field.connect_distance, DEFAULT_CONNECT_DISTANCE);
			assert_eq!(config.field.line_opacity, DEFAULT_LINE_OPACITY);
		}

		let config =
			PageConfig::from_json(r#"{ "field": { "connect_distance": 20, "line_opacity": 0.3 } }"#)
				.unwrap();
		assert_eq!(config.field.connect_distance, 20.0);
		assert_eq!(config.field.line_opacity, 0.3);
	}

	#[test]
	fn line_count_is_pairwise() {
		let mut config = FieldConfig::default();
		assert_eq!(config.line_count(), 1225);
		config.particle_count = 1;
		assert_eq!(config.line_count(), 0);
		config.particle_count = 0;
		assert_eq!(config.line_count(), 0);
	}
}
