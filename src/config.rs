//! Startup Configuration
//!
//! Read from `<meta>` tags in `index.html` so a deployment can point the
//! screen at another service without rebuilding.

use log::LevelFilter;
use tasks_client::ClientConfig;

const API_URL_META: &str = "tasks-api-url";
const LOG_LEVEL_META: &str = "log-level";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ClientConfig,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ClientConfig::default(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Build from a name -> value lookup; unknown or bad values keep defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api = ClientConfig::from_override(lookup(API_URL_META).as_deref());
        let log_level = lookup(LOG_LEVEL_META)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        Self { api, log_level }
    }

    pub fn from_document() -> Self {
        Self::from_lookup(meta_content)
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document.query_selector(&selector).ok()??.get_attribute("content")
}
