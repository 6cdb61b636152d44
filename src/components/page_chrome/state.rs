//! Page-level presentation state.
//!
//! [`PageState`] is an immutable snapshot. Each user action computes the next
//! snapshot together with what must be written to the page; applying it is
//! left to the DOM adapter.

use super::tabs::{TabPresentation, TabSnapshot};
use crate::components::theme::{ThemeMode, ThemePresentation};

/// Theme and visible section of the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
	pub theme: ThemeMode,
	/// Currently shown section, if any has been selected.
	pub active_section: Option<String>,
}

impl PageState {
	pub fn new(theme: ThemeMode) -> Self {
		Self {
			theme,
			active_section: None,
		}
	}

	pub fn toggle_theme(&self) -> (PageState, ThemePresentation) {
		let theme = self.theme.toggled();
		let next = PageState {
			theme,
			..self.clone()
		};
		(next, ThemePresentation::for_mode(theme))
	}

	pub fn show_tab(&self, snapshot: &TabSnapshot, target: &str) -> (PageState, TabPresentation) {
		let presentation = TabPresentation::select(snapshot, target);
		let next = PageState {
			active_section: presentation.active_section().map(str::to_string),
			..self.clone()
		};
		(next, presentation)
	}
}
