//! Engine Registry
//!
//! Tracks the playback engines available to a media player host so the host
//! can enumerate candidates when choosing how to play a source.
//!
//! # Architecture
//!
//! The registry does not create engines, check what they can play, or persist
//! anything. Engines are owned by the host; the registry only keeps ordered,
//! identity-compared handles to them.
//!
//! ## Registry (`registry` module)
//! - `register()` - Append an engine; `None` and duplicates are no-ops
//! - `unregister()` - Remove an engine, keeping the order of the rest
//! - `list()` - Snapshot of registered engines in priority order
//! - `reset()` - Discard every registered engine
//! - `register_engine()` - Free function targeting the process-wide registry
//!
//! ## Engines (`engine` module)
//! - `Engine` - Contract an engine implements (a stable `id`)
//! - `EngineDescriptor` - Shared handle compared by identity
//! - `NamedEngine` - Engine known only by its id
//!
//! ## Host support
//! - `config` - JSON host configuration
//! - `logging` - `tracing` subscriber setup
//!
//! # Example
//!
//! ```
//! use engine_registry::{EngineDescriptor, EngineRegistry, NamedEngine};
//!
//! let registry = EngineRegistry::new();
//! let html5 = EngineDescriptor::new(NamedEngine::new("html5"));
//!
//! registry.register(html5.clone());
//! registry.register(html5.clone());
//! assert_eq!(registry.list(), vec![html5]);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod registry;

pub use engine::{Engine, EngineDescriptor, NamedEngine};
pub use error::{EngineRegistryError, Result};
pub use registry::{register_engine, EngineRegistry};
