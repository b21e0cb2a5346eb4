//! Client configuration

use serde::{Deserialize, Serialize};

/// Where the tasks service listens when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service root; `/tasks` is appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Build from an optional override, ignoring empty values
    pub fn from_override(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_localhost() {
        assert_eq!(ClientConfig::default().base_url, "http://localhost:3000");
    }

    #[test]
    fn test_from_override() {
        assert_eq!(ClientConfig::from_override(None), ClientConfig::default());
        assert_eq!(ClientConfig::from_override(Some("   ")), ClientConfig::default());
        assert_eq!(
            ClientConfig::from_override(Some(" https://tasks.example.com/api ")).base_url,
            "https://tasks.example.com/api"
        );
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
    }
}
