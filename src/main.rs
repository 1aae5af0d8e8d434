//! Todo Sync Frontend Entry Point

mod app;
mod components;
mod context;
mod logger;

use app::App;
use leptos::prelude::*;
use todo_sync_core::{ClientConfig, DEFAULT_BASE_URL};

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match ClientConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(e) => (ClientConfig::default(), Some(e)),
    };
    logger::init(config.log_level);
    if let Some(e) = config_error {
        log::error!("{}, falling back to {}", e, DEFAULT_BASE_URL);
    }
    log::info!("Task API at {}", config.base_url);

    mount_to_body(move || view! { <App config=config /> });
}
