//! Page components: the particle background and the page chrome around it.

pub mod page_chrome;
pub mod particle_field;
pub mod theme;
