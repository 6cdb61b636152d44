//! Drifting particle background with proximity lines.
//!
//! Renders snow-like shapes that fall and sway across the viewport, with a faint
//! line between every pair of particles closer than a threshold:
//! - Fixed-step per-frame motion with wrap-around at the viewport edges
//! - Pairwise lines whose opacity fades linearly with distance
//! - Full rebuild on viewport resize
//! - Theme-dependent particle tint
//!
//! # Example
//!
//! ```ignore
//! use snowdrift::{mount, PageConfig, ThemeMode};
//!
//! let background = mount(&PageConfig::default(), ThemeMode::Dark, fastrand::Rng::new());
//! ```

mod component;
mod config;
mod dom_surface;
mod field;
mod frame_loop;
mod line;
mod particle;
mod surface;

pub use component::{ParticleBackground, mount};
pub use config::{FieldConfig, PageConfig};
