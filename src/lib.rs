//! Bounded undo/redo history with pluggable dedup, plus a leptos binding.
//!
//! [`History`] is the container: a past, a present and a future, with an
//! optional bound on the past and an equality predicate that turns
//! "no real change" assignments into no-ops. [`use_history`] exposes it to
//! leptos views as signals.

pub mod components;
pub mod config;
pub mod equality;
pub mod error;
pub mod history;
pub mod shortcut;
pub mod snapshot;
pub mod use_history;

pub use config::HistoryConfig;
pub use error::ConfigError;
pub use history::History;
pub use shortcut::HistoryShortcut;
pub use snapshot::Snapshot;
pub use use_history::{use_history, use_history_with, UseHistory};
