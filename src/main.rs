//! Task List Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod form;
mod logging;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use tasks_client::{ClientConfig, TasksClient};

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_document();
    if let Err(e) = logging::init(config.log_level) {
        web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
    }

    let client = TasksClient::new(&config.api)
        .or_else(|e| {
            log::error!("{}; falling back to {}", e, tasks_client::DEFAULT_BASE_URL);
            TasksClient::new(&ClientConfig::default())
        })
        .expect("default tasks URL is valid");
    log::info!("[APP] Using tasks service at {}", client.base_url());

    mount_to_body(move || view! { <App client=client /> });
}
