//! Engine contract and the identity-compared handle the registry stores.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A pluggable playback implementation a host can discover through the registry.
///
/// The registry only reads [`Engine::id`], and only for diagnostics.
pub trait Engine: Send + Sync {
    /// Stable, human-readable identifier (e.g. `"html5"`).
    fn id(&self) -> &str;
}

/// Shared handle to a registered engine.
///
/// Equality and hashing follow handle identity: clones of one descriptor are
/// equal, while two descriptors built from separate engines are distinct even
/// when their ids match.
#[derive(Clone)]
pub struct EngineDescriptor {
    engine: Arc<dyn Engine>,
}

impl EngineDescriptor {
    pub fn new<E: Engine + 'static>(engine: E) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Wrap an engine that is already shared elsewhere in the host.
    pub fn from_arc(engine: Arc<dyn Engine>) -> Self {
        Self { engine }
    }

    pub fn id(&self) -> &str {
        self.engine.id()
    }

    pub fn engine(&self) -> &dyn Engine {
        self.engine.as_ref()
    }

    /// Returns true if both descriptors point at the same engine.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }

    // Data pointer only; vtable pointers are not stable across codegen units.
    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.engine) as *const ()
    }
}

impl PartialEq for EngineDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for EngineDescriptor {}

impl Hash for EngineDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for EngineDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineDescriptor")
            .field("id", &self.id())
            .finish()
    }
}

/// Engine known only by its id.
///
/// Used by hosts that register engines from configuration rather than from
/// concrete implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedEngine {
    pub id: String,
}

impl NamedEngine {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Engine for NamedEngine {
    fn id(&self) -> &str {
        &self.id
    }
}
