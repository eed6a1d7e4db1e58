//! Browser entry point: mounts the portfolio app.

// the library crate owns every dependency except leptos
#![allow(unused_crate_dependencies)]

use skills_constellation::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
