//! snowdrift: drifting particle background and page chrome for static sites.
//!
//! This crate provides a WASM-based particle background that renders falling,
//! swaying shapes joined by faint proximity lines, plus the tab switcher and
//! light/dark toggle the surrounding page calls into.

use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

mod components;
mod page;

// Only used by the browser integration tests.
#[cfg(test)]
use wasm_bindgen_test as _;

pub use components::particle_field::{FieldConfig, PageConfig, ParticleBackground, mount};
pub use components::theme::ThemeMode;
pub use page::{boot, show_tab, toggle_theme};

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "snowdrift-config";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("snowdrift: logging initialized");
}

fn config_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Load page configuration from a script element with id="snowdrift-config".
/// Falls back to defaults when the element is absent or malformed.
pub fn load_config() -> PageConfig {
	let Some(json_text) = config_text() else {
		return PageConfig::default();
	};

	match PageConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"snowdrift: loaded config ({} particles, container #{})",
				config.field.particle_count, config.container_id
			);
			config
		}
		Err(e) => {
			warn!("snowdrift: failed to parse config, using defaults: {}", e);
			PageConfig::default()
		}
	}
}
