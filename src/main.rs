//! Todo Client Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod edit_session;
mod error;
mod format;
mod models;
mod store;
mod todo_list;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(log::LevelFilter::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }

    let config = ClientConfig::from_document().unwrap_or_else(|e| {
        log::error!("[APP] {}; ignoring the page config", e);
        ClientConfig::from_env()
    });

    mount_to_body(move || view! { <App config=config /> });
}
