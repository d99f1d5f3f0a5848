#![allow(warnings)]
//! Component Workshop Frontend Entry Point

mod models;
mod config;
mod context;
mod store;
mod logging;
mod components;
mod app;
mod markdown;

use app::App;
use leptos::prelude::*;
use workshop_state::WorkshopConfig;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::read_config();
    let workshop_config = match &loaded {
        Ok(Some(loaded_config)) => loaded_config.clone(),
        _ => WorkshopConfig::default(),
    };
    logging::init(&workshop_config);

    match loaded {
        Ok(Some(_)) => log::info!("[APP] Loaded configuration from #{}", config::CONFIG_ELEMENT_ID),
        Ok(None) => log::debug!("[APP] No page configuration, using defaults"),
        Err(e) => log::warn!("[APP] Invalid configuration, using defaults: {}", e),
    }

    mount_to_body(move || view! { <App config=workshop_config /> });
}
