//! Error types for the host-facing layers.
//!
//! The registry itself never fails; these errors come from loading host
//! configuration and installing the log subscriber.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineRegistryError {
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid log filter '{filter}': {message}")]
    LogFilter { filter: String, message: String },

    #[error("Failed to install log subscriber: {0}")]
    Subscriber(String),
}

pub type Result<T> = std::result::Result<T, EngineRegistryError>;
