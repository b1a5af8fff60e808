#![allow(warnings)]
//! Order Form Frontend Entry Point

mod models;
mod item_list;
mod field_label;
mod form;
mod validation;
mod config;
mod logging;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::OrderFormConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    logging::init();
    let config = OrderFormConfig::load();
    logging::set_level(config.level_filter().unwrap_or(log::LevelFilter::Info));
    log::info!("[APP] Mounting {}", config.form_name);

    mount_to_body(move || view! { <App config=config /> });
}
