pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod logging;
pub mod pages;
pub mod utils;

use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::AppConfig;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    logging::init(config.log_level);
    log::info!("starting dashboard against {}", config.api_base);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
