//! Light/dark display mode and the presentation derived from it.
//!
//! The mode itself is a plain value carrying the particle tint; the page chrome
//! shown for a mode (icon glyphs, toggle label) is computed by
//! [`ThemePresentation::for_mode`] so it can be checked without a DOM.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `0.0..=1.0`.
	pub a: f64,
}

impl Color {
	/// Color from channels and alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// CSS color string; opaque colors render as hex.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Particle tint on a light page.
pub const LIGHT_PARTICLE: Color = Color::rgba(255, 50, 50, 0.8);
/// Particle tint on a dark page.
pub const DARK_PARTICLE: Color = Color::rgba(255, 255, 255, 0.8);

/// Page display mode. Dark is the page's unstyled default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
	/// White particles on a dark page.
	#[default]
	Dark,
	/// Red particles on a light page.
	Light,
}

impl ThemeMode {
	/// The page carries a `light` class on `<body>` in light mode.
	pub fn from_light_class(has_light_class: bool) -> Self {
		if has_light_class { Self::Light } else { Self::Dark }
	}

	/// The other mode.
	pub fn toggled(self) -> Self {
		match self {
			Self::Dark => Self::Light,
			Self::Light => Self::Dark,
		}
	}

	/// Whether this is [`ThemeMode::Light`].
	pub fn is_light(self) -> bool {
		self == Self::Light
	}

	/// Fixed particle color for this mode.
	pub fn particle_color(self) -> Color {
		match self {
			Self::Light => LIGHT_PARTICLE,
			Self::Dark => DARK_PARTICLE,
		}
	}
}

/// Everything the theme toggle writes to the page for a given mode.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemePresentation {
	/// Whether `<body>` should carry the `light` class.
	pub body_light: bool,
	/// Class list for the large header icon (`#themeIcon-lg`).
	pub icon_lg_class: &'static str,
	pub icon_lg_color: &'static str,
	/// Class list for the compact menu icon (`#themeIcon`).
	pub icon_class: &'static str,
	/// Label for `#themeText`; names the mode the toggle switches *to*.
	pub toggle_text: &'static str,
	/// Nav links keep the same color in both modes.
	pub nav_link_color: &'static str,
}

impl ThemePresentation {
	pub fn for_mode(mode: ThemeMode) -> Self {
		let light = mode.is_light();
		let icon = if light { "fa-solid fa-moon" } else { "fa-solid fa-sun" };
		Self {
			body_light: light,
			icon_lg_class: icon,
			icon_lg_color: if light { "var(--neon-blue)" } else { "var(--neon-cyan)" },
			icon_class: icon,
			toggle_text: if light { "Dark Mode" } else { "Light Mode" },
			nav_link_color: "var(--text-dark)",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn particle_colors_render_as_rgba() {
		assert_eq!(LIGHT_PARTICLE.to_css(), "rgba(255, 50, 50, 0.8)");
		assert_eq!(DARK_PARTICLE.to_css(), "rgba(255, 255, 255, 0.8)");
		assert_eq!(Color::rgba(255, 0, 16, 1.0).to_css(), "#ff0010");
	}

	#[test]
	fn toggling_twice_restores_mode() {
		for mode in [ThemeMode::Dark, ThemeMode::Light] {
			assert_ne!(mode.toggled(), mode);
			assert_eq!(mode.toggled().toggled(), mode);
			assert_eq!(mode.toggled().toggled().particle_color(), mode.particle_color());
		}
	}

	#[test]
	fn body_class_maps_to_mode() {
		assert_eq!(ThemeMode::from_light_class(true), ThemeMode::Light);
		assert_eq!(ThemeMode::from_light_class(false), ThemeMode::Dark);
		assert_eq!(ThemeMode::default(), ThemeMode::Dark);
	}

	#[test]
	fn light_presentation_offers_dark_mode() {
		let p = ThemePresentation::for_mode(ThemeMode::Light);
		assert!(p.body_light);
		assert_eq!(p.icon_lg_class, "fa-solid fa-moon");
		assert_eq!(p.icon_lg_color, "var(--neon-blue)");
		assert_eq!(p.toggle_text, "Dark Mode");
	}

	#[test]
	fn dark_presentation_offers_light_mode() {
		let p = ThemePresentation::for_mode(ThemeMode::Dark);
		assert!(!p.body_light);
		assert_eq!(p.icon_class, "fa-solid fa-sun");
		assert_eq!(p.icon_lg_color, "var(--neon-cyan)");
		assert_eq!(p.toggle_text, "Light Mode");
		assert_eq!(p.nav_link_color, "var(--text-dark)");
	}
}
