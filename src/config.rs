//! Order Form Configuration
//!
//! Read from a JSON `data-order-form` attribute on `<body>`; every key is
//! optional and falls back to the defaults below.

use serde::Deserialize;
use thiserror::Error;

/// Attribute on `<body>` carrying the JSON config
pub const CONFIG_ATTRIBUTE: &str = "data-order-form";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid order form config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderFormConfig {
    /// Form identifier used in log lines
    pub form_name: String,
    pub heading: String,
    /// Keep in-progress entries when the form is unmounted
    pub keep_values_on_unmount: bool,
    pub log_level: String,
}

impl Default for OrderFormConfig {
    fn default() -> Self {
        Self {
            form_name: "SubmitItems".to_string(),
            heading: "Submit Your Order".to_string(),
            keep_values_on_unmount: true,
            log_level: "info".to_string(),
        }
    }
}

impl OrderFormConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.level_filter()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// Load from the page, falling back to defaults
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));

        Self::from_attribute(raw.as_deref())
    }

    /// Parse the attribute value; a missing or invalid value gives the defaults
    pub fn from_attribute(raw: Option<&str>) -> Self {
        match raw {
            Some(json) => Self::from_json(json).unwrap_or_else(|e| {
                log::warn!("[CONFIG] {}, using defaults", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
