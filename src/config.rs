use crate::error::{config_error, env_error, PluginResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use url::Url;

/// Base URL of the closer2event map widget, also its CSP origin
pub const MAP_EMBED_BASE: &str = "https://map.closer2event.com";

/// Global plugin configuration
#[derive(Debug, Clone)]
pub struct PluginConfig {
    /// Base URL of the shop; the widget receives its hostname
    pub site_url: Url,
    /// Map of hook names to their enabled status
    pub hooks: HashMap<String, bool>,
}

impl PluginConfig {
    /// Create a configuration with every hook enabled
    pub fn new(site_url: Url) -> Self {
        let mut hooks = HashMap::new();
        for name in crate::hooks::signals::ALL {
            hooks.insert(name.to_string(), true);
        }

        Self { site_url, hooks }
    }

    /// Load configuration from environment and config file
    pub fn load() -> PluginResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let site_url = env::var("SITE_URL").map_err(|_| env_error("SITE_URL"))?;
        let site_url = Url::parse(&site_url)
            .map_err(|e| config_error(&format!("Invalid SITE_URL: {}", e)))?;

        let mut config = Self::new(site_url);

        // Load hook configuration from file if it exists
        if let Ok(content) = fs::read_to_string("config/hooks.toml") {
            if let Ok(file_hooks) = toml::from_str::<HashMap<String, bool>>(&content) {
                // Merge with defaults
                for (key, value) in file_hooks {
                    config.hooks.insert(key, value);
                }
            }
        }

        Ok(config)
    }

    /// Host portion of the site URL
    pub fn site_hostname(&self) -> PluginResult<&str> {
        self.site_url
            .host_str()
            .ok_or_else(|| config_error("SITE_URL has no hostname"))
    }

    /// Check if a hook is enabled
    pub fn is_hook_enabled(&self, name: &str) -> bool {
        *self.hooks.get(name).unwrap_or(&true)
    }
}

/// Per-event plugin settings from the host's settings store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventSettings {
    /// closer2event event id; the widget shows a generic view when unset
    pub map_event_id: Option<String>,
    /// Full embed URL override; skips parameter building entirely
    pub embed_link: Option<String>,
}
