pub mod api;
pub mod canvas;
pub mod components;
pub mod config;
pub mod state;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use components::app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let (config, warnings) = config::load();
    if let Some(level) = config.log_level.to_level() {
        let _ = console_log::init_with_level(level);
    }
    for w in &warnings {
        log::warn!("{}", w);
    }
    log::info!("ECG viewer starting (api base: {:?})", config.api_base);

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
