//! Engine registry for the player host.
//!
//! Tracks which playback engines are available so the host can enumerate
//! candidates when choosing how to play a source.
//!
//! # Behavior
//!
//! - Engines are unique by handle identity, not by id.
//! - Registration order is kept; [`EngineRegistry::list`] returns engines in
//!   the order they were registered, which hosts use as priority.
//! - No operation fails. Absent input, duplicate registration and removal of
//!   an unknown engine are silent no-ops, apart from debug diagnostics.
//!
//! # Threading
//!
//! The registry is `Send + Sync`. Every operation runs under a single lock
//! acquisition, so the duplicate check and the append cannot interleave with
//! another thread's registration.

use crate::EngineDescriptor;
use indexmap::IndexSet;
use parking_lot::RwLock;
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

const COMPONENT: &str = "EngineRegistry";

static GLOBAL: LazyLock<EngineRegistry> = LazyLock::new(EngineRegistry::new);

/// Ordered, duplicate-free set of registered engines.
pub struct EngineRegistry {
    engines: RwLock<IndexSet<EngineDescriptor>>,
}

impl EngineRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            engines: RwLock::new(IndexSet::new()),
        }
    }

    /// The process-wide registry, created empty on first use.
    pub fn global() -> &'static EngineRegistry {
        &GLOBAL
    }

    /// Add an engine to the end of the registry.
    ///
    /// `None` is ignored. Registering an engine that is already present leaves
    /// the order untouched.
    pub fn register(&self, engine: impl Into<Option<EngineDescriptor>>) {
        let Some(engine) = engine.into() else {
            return;
        };

        let mut engines = self.engines.write();
        if engines.contains(&engine) {
            debug!(
                component = COMPONENT,
                engine = engine.id(),
                "Engine <{}> is already registered, not registering again",
                engine.id()
            );
            return;
        }

        debug!(
            component = COMPONENT,
            engine = engine.id(),
            "Engine <{}> has been registered successfully",
            engine.id()
        );
        engines.insert(engine);
    }

    /// Remove an engine, keeping the relative order of the others.
    ///
    /// Engines that are not registered are ignored.
    pub fn unregister(&self, engine: &EngineDescriptor) {
        let mut engines = self.engines.write();
        if engines.shift_remove(engine) {
            debug!(
                component = COMPONENT,
                engine = engine.id(),
                "Unregistered <{}> engine",
                engine.id()
            );
        }
    }

    /// Snapshot of the registered engines in registration order.
    ///
    /// The returned vector is a copy; changing it does not affect the registry.
    pub fn list(&self) -> Vec<EngineDescriptor> {
        self.engines.read().iter().cloned().collect()
    }

    /// Discard every registered engine.
    pub fn reset(&self) {
        let mut engines = self.engines.write();
        let discarded = engines.len();
        engines.clear();

        if discarded > 0 {
            debug!(component = COMPONENT, discarded, "Registry reset");
        }
    }

    pub fn len(&self) -> usize {
        self.engines.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.read().is_empty()
    }

    /// Whether this exact engine handle is registered.
    pub fn contains(&self, engine: &EngineDescriptor) -> bool {
        self.engines.read().contains(engine)
    }

    /// First registered engine with the given id, in priority order.
    pub fn find(&self, id: &str) -> Option<EngineDescriptor> {
        self.engines
            .read()
            .iter()
            .find(|engine| engine.id() == id)
            .cloned()
    }

    /// Ids of the registered engines in registration order.
    pub fn ids(&self) -> Vec<String> {
        self.engines
            .read()
            .iter()
            .map(|engine| engine.id().to_string())
            .collect()
    }
}

impl Default for EngineRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EngineRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineRegistry")
            .field("engines", &self.ids())
            .finish()
    }
}

impl Extend<EngineDescriptor> for EngineRegistry {
    fn extend<I: IntoIterator<Item = EngineDescriptor>>(&mut self, iter: I) {
        for engine in iter {
            self.register(engine);
        }
    }
}

impl FromIterator<EngineDescriptor> for EngineRegistry {
    fn from_iter<I: IntoIterator<Item = EngineDescriptor>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

/// Register an engine with the process-wide registry.
///
/// Shorthand for `EngineRegistry::global().register(engine)`.
pub fn register_engine(engine: impl Into<Option<EngineDescriptor>>) {
    GLOBAL.register(engine);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NamedEngine;
    use parking_lot::Mutex;
    use std::io;
    use std::sync::Arc;
    use std::thread;
    use tracing::Level;
    use tracing_subscriber::fmt::MakeWriter;

    fn engine(id: &str) -> EngineDescriptor {
        EngineDescriptor::new(NamedEngine::new(id))
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Run `f` with a debug-level subscriber and return everything it logged.
    fn capture_logs(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(buffer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = buffer.0.lock().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn register_appends_in_order() {
        let registry = EngineRegistry::new();
        let a = engine("a");
        let b = engine("b");

        registry.register(a.clone());
        registry.register(b.clone());

        assert_eq!(registry.list(), vec![a, b]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn register_twice_keeps_single_entry_and_order() {
        let registry = EngineRegistry::new();
        let a = engine("a");
        let b = engine("b");
        registry.register(a.clone());
        registry.register(b.clone());

        registry.register(a.clone());

        assert_eq!(registry.list(), vec![a, b]);
    }

    #[test]
    fn register_none_is_ignored() {
        let registry = EngineRegistry::new();
        let a = engine("a");
        registry.register(a.clone());

        registry.register(None);

        assert_eq!(registry.list(), vec![a]);
    }

    #[test]
    fn same_id_distinct_handles_are_both_registered() {
        let registry = EngineRegistry::new();
        let first = engine("alpha");
        let second = engine("alpha");

        registry.register(first.clone());
        registry.register(second.clone());

        assert_eq!(registry.list(), vec![first.clone(), second]);
        assert_eq!(registry.find("alpha"), Some(first));
    }

    #[test]
    fn unregister_keeps_relative_order() {
        let registry: EngineRegistry = ["a", "b", "c", "d"].into_iter().map(engine).collect();
        let engines = registry.list();

        registry.unregister(&engines[1]);

        assert_eq!(
            registry.list(),
            vec![engines[0].clone(), engines[2].clone(), engines[3].clone()]
        );
        assert!(!registry.contains(&engines[1]));
    }

    #[test]
    fn unregister_unknown_is_ignored() {
        let registry = EngineRegistry::new();
        let a = engine("a");
        registry.register(a.clone());

        registry.unregister(&engine("a"));

        assert_eq!(registry.list(), vec![a]);
    }

    #[test]
    fn reset_empties_and_is_idempotent() {
        let registry: EngineRegistry = ["a", "b"].into_iter().map(engine).collect();

        registry.reset();
        assert!(registry.is_empty());
        assert!(registry.list().is_empty());

        registry.reset();
        assert!(registry.is_empty());
    }

    #[test]
    fn registry_is_reusable_after_reset() {
        let registry = EngineRegistry::new();
        let a = engine("a");
        registry.register(a.clone());
        registry.reset();

        registry.register(a.clone());

        assert_eq!(registry.list(), vec![a]);
    }

    #[test]
    fn list_is_a_copy() {
        let registry = EngineRegistry::new();
        let a = engine("a");
        registry.register(a.clone());

        let mut listed = registry.list();
        listed.clear();
        listed.push(engine("intruder"));

        assert_eq!(registry.list(), vec![a]);
    }

    #[test]
    fn find_and_ids_follow_priority_order() {
        let registry: EngineRegistry = ["html5", "flash"].into_iter().map(engine).collect();

        assert_eq!(registry.ids(), vec!["html5", "flash"]);
        assert_eq!(registry.find("flash").map(|e| e.id().to_string()), Some("flash".into()));
        assert_eq!(registry.find("cast"), None);
    }

    #[test]
    fn from_iter_collapses_repeated_handles() {
        let a = engine("a");
        let registry: EngineRegistry = vec![a.clone(), a.clone(), engine("b")].into_iter().collect();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.list()[0], a);
    }

    #[test]
    fn concurrent_registration_of_one_handle_stores_it_once() {
        let registry = Arc::new(EngineRegistry::new());
        let shared = engine("shared");

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                let shared = shared.clone();
                thread::spawn(move || {
                    registry.register(shared);
                    registry.register(engine(&format!("own-{i}")));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let listed = registry.list();
        assert_eq!(listed.len(), 9);
        assert_eq!(listed.iter().filter(|e| **e == shared).count(), 1);
    }

    #[test]
    fn register_and_unregister_emit_debug_diagnostics() {
        let registry = EngineRegistry::new();
        let alpha = engine("alpha");

        let logs = capture_logs(|| {
            registry.register(alpha.clone());
            registry.register(alpha.clone());
            registry.unregister(&alpha);
        });

        assert!(logs.contains("Engine <alpha> has been registered successfully"));
        assert!(logs.contains("Engine <alpha> is already registered"));
        assert!(logs.contains("Unregistered <alpha> engine"));
        assert!(logs.contains("EngineRegistry"));
        assert!(logs.contains("DEBUG"));
    }

    #[test]
    fn ignored_inputs_log_nothing() {
        let registry = EngineRegistry::new();

        let logs = capture_logs(|| {
            registry.register(None);
            registry.unregister(&engine("ghost"));
            registry.reset();
        });

        assert!(logs.is_empty(), "unexpected logs: {logs}");
    }
}
