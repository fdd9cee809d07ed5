//! Cart Page Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod logging;
mod models;
mod page;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let data = match page::load() {
        Ok(data) => data,
        Err(e) => {
            web_sys::console::error_1(&format!("[cart] Cannot start: {}", e).into());
            return;
        }
    };
    logging::init(&data.config.log_level);
    mount_to_body(move || view! { <App data=data /> });
}
