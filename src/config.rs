//! Monitor configuration.
//!
//! Configuration is optional; [`MonitorConfig::default`] tracks the primary button and
//! re-queries the environment mode every frame. It can also be loaded from TOML:
//!
//! ```toml
//! button = 0
//! mode_query = "once"
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// When the monitor asks its source for the [`InputMode`](crate::source::InputMode).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeQuery {
    /// Ask on every update.
    #[default]
    EveryFrame,
    /// Ask on the first update and reuse the answer. Only valid for hosts whose
    /// mode never changes at runtime.
    Once,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Pointer button tracked in pointer mode (`0` = primary).
    pub button: u16,
    pub mode_query: ModeQuery,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            button: 0,
            mode_query: ModeQuery::EveryFrame,
        }
    }
}

impl MonitorConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}
