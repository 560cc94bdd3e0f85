//! Wedding Site Frontend Entry Point

mod admin;
mod api;
mod app;
mod components;
mod config;
mod context;
mod countdown;
mod error;
mod logging;
mod media;
mod models;
mod notify;
mod pages;
mod reorder;
mod session;
mod store;
mod theme;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    logging::init(config.log_level);
    tracing::info!(api = %config.api_base_url, "starting wedding site");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
