pub mod app;
pub mod components;
pub mod i18n;
pub mod theme;

#[cfg(all(test, target_arch = "wasm32"))]
mod test_support;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("job run dashboard starting");
    leptos::mount_to_body(app::App);
}
