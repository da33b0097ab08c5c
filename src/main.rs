//! Phonebook Frontend Entry Point

mod domain;
mod repository;
mod controller;
mod config;
mod logger;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = AppConfig::load();
    let config = loaded.clone().unwrap_or_default();
    logger::init(config.log_level());
    if let Err(e) = loaded {
        log::warn!("{}; using defaults", e);
    }
    log::info!("starting with {:?} backend", config.backend);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
