//! Todo Board Frontend Entry Point

mod actions;
mod api;
mod app;
mod browser;
mod components;
mod config;
mod context;
mod dialogs;
mod error;
mod feedback;
mod filter;
mod models;
mod render;
mod stats;
mod store;
mod time_format;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();
    tracing::info!("todo board starting");
    mount_to_body(App);
}
