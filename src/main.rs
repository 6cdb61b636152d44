//! Client entrypoint for the browser build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use snowdrift::{boot, init_logging};

fn main() {
	init_logging();
	boot();
}
