//! IndieMart Web App (Leptos + WASM)

mod app;
mod api;
mod browser;
mod components;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    browser::apply_meta();
    leptos::mount::mount_to_body(app::App);
}
