//! Host configuration.
//!
//! Loaded from JSON. Every field has a default, so an empty object is a valid
//! config:
//!
//! ```json
//! {
//!   "log": { "filter": "engine_registry=debug", "ansi": false },
//!   "engines": ["html5", "flash"]
//! }
//! ```

use crate::error::{EngineRegistryError, Result};
use crate::{EngineDescriptor, NamedEngine};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub log: LogConfig,
    /// Engine ids in priority order.
    pub engines: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directives. `RUST_LOG` takes precedence when set.
    pub filter: String,
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: String::from("info"),
            ansi: true,
        }
    }
}

impl HostConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| EngineRegistryError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Build one descriptor per configured id, in priority order.
    ///
    /// A repeated id maps to the handle created for its first occurrence, so
    /// registering the result collapses repeats.
    pub fn engine_descriptors(&self) -> Vec<EngineDescriptor> {
        let mut seen: HashMap<&str, EngineDescriptor> = HashMap::new();

        self.engines
            .iter()
            .map(|id| {
                seen.entry(id.as_str())
                    .or_insert_with(|| EngineDescriptor::new(NamedEngine::new(id.as_str())))
                    .clone()
            })
            .collect()
    }
}
