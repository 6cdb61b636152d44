//! Page chrome: tab switching and the light/dark toggle.
//!
//! Both helpers follow the same shape: snapshot the page, compute the next
//! [`PageState`] and a presentation with pure code, then hand the presentation
//! to [`dom`] to apply.

pub mod dom;
mod state;
mod tabs;

pub use state::PageState;
