pub mod app;
pub mod logs;
pub mod shared;
pub mod usecases;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // Resolve config up front so a broken embed fails loudly, not on the
    // first request.
    if let Err(e) = shared::config::get() {
        log::error!("{}", e);
    }

    leptos::mount::mount_to_body(app::App);
}
