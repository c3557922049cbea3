pub mod app;
pub mod components;
pub mod config;
pub mod i18n;
pub mod pages;
pub mod state;
pub mod storage;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("portal frontend starting");
    leptos::mount_to_body(app::App);
}
