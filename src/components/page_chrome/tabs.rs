//! Section switching for single-page layouts.

/// What the tab switcher needs to know about the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TabSnapshot {
	/// Ids of the `main section` elements, in document order.
	pub sections: Vec<String>,
	/// Text content of every `.nav-link`, in document order.
	pub nav_links: Vec<String>,
}

/// Result of selecting a tab.
#[derive(Clone, Debug, PartialEq)]
pub struct TabPresentation {
	/// Every section id with whether it should be active.
	pub sections: Vec<(String, bool)>,
	/// Index into [`TabSnapshot::nav_links`] of the link to highlight.
	pub active_link: Option<usize>,
}

/// Fuzzy nav match: `videosTab` matches a link reading "Videos".
///
/// The first `Tab` is dropped from the id, then both sides are compared
/// case-insensitively by substring.
pub fn link_matches(link_text: &str, section_id: &str) -> bool {
	let needle = section_id.replacen("Tab", "", 1).to_lowercase();
	link_text.to_lowercase().contains(&needle)
}

impl TabPresentation {
	pub fn select(snapshot: &TabSnapshot, target: &str) -> Self {
		let sections = snapshot
			.sections
			.iter()
			.map(|id| (id.clone(), id == target))
			.collect();
		let active_link = snapshot
			.nav_links
			.iter()
			.position(|text| link_matches(text, target));

		Self {
			sections,
			active_link,
		}
	}

	pub fn active_section(&self) -> Option<&str> {
		self.sections
			.iter()
			.find(|(_, active)| *active)
			.map(|(id, _)| id.as_str())
	}
}
