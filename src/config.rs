//! Application Configuration
//!
//! Read once at startup from `<script id="app-config" type="application/json">`
//! in `index.html`. Every field is optional.

use serde::Deserialize;

/// Element holding the JSON configuration block
const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for every REST path, e.g. `/api` or `http://localhost:8000/api`
    pub api_base_url: String,
    /// `days` query parameter for the daily statistics tab
    pub daily_stats_days: u32,
    /// `weeks` query parameter for the weekly statistics tab
    pub weekly_stats_weeks: u32,
    /// How long a notification stays visible
    pub notification_timeout_ms: u32,
    /// Category shown for tasks without one, and used when none exist yet
    pub default_category: String,
    /// Preselected colour in the new-category form
    pub default_category_color: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            daily_stats_days: 7,
            weekly_stats_weeks: 4,
            notification_timeout_ms: 3000,
            default_category: "General".to_string(),
            default_category_color: "#3B82F6".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Load from the page, falling back to defaults
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            tracing::debug!("no #{} block, using default config", CONFIG_ELEMENT_ID);
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "invalid #{} block, using default config", CONFIG_ELEMENT_ID);
                Self::default()
            }
        }
    }
}
