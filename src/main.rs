//! Crew Dashboard Frontend Entry Point

mod app;
mod bridge;
mod commands;
mod components;
mod config;
mod error;
mod handlers;
mod models;
mod render;
mod sequencer;
mod store;

use app::App;
use config::DashboardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    let config = DashboardConfig::load();
    tracing::info!(?config, "starting crew dashboard frontend");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
