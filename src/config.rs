//! Controller configuration.
//!
//! Every field has a default, so an empty JSON object (or no config at all)
//! yields the stock `theme-switcher` / `mode` pairing.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ELEMENT_ID, DEFAULT_LOG_LEVEL, DEFAULT_STORAGE_KEY};
use crate::error::ThemeError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToggleConfig {
    /// Id of the toggle element.
    pub element_id: String,
    /// Storage key for the persisted preference.
    pub storage_key: String,
    /// Console log level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            element_id: DEFAULT_ELEMENT_ID.to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl ToggleConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] if `raw` is not a valid JSON object of
    /// this shape.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parsed log level; unrecognized values fall back to `warn`.
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Warn)
    }
}
