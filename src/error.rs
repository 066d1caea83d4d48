use thiserror::Error;

/// Errors raised while loading a [`HistoryConfig`](crate::config::HistoryConfig).
///
/// The container operations themselves never fail.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid history configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
