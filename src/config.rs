use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Construction-time settings for a [`History`](crate::history::History).
///
/// `max_size` bounds the number of past entries kept. `None` means unbounded.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct HistoryConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<usize>,
}

impl HistoryConfig {
    pub fn unbounded() -> Self {
        Self { max_size: None }
    }

    pub fn bounded(max_size: usize) -> Self {
        Self {
            max_size: Some(max_size),
        }
    }

    /// Parse a config from JSON, e.g. `{"max_size": 50}`. Missing fields fall
    /// back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
