//! In-memory implementation of EngineRegistry.
//!
//! Registration order is preserved; it drives the extension ranking.

use crate::engine::ScriptEngineFactory;
use std::sync::{Arc, RwLock};

/// The process-wide script-engine manager, injected into the resolver as
/// read-only state rather than reached for as a global.
pub trait EngineRegistry: Send + Sync {
    /// All registered factories, in registration order.
    fn factories(&self) -> Vec<Arc<dyn ScriptEngineFactory>>;

    /// The first registered factory declaring the given extension.
    fn by_extension(&self, extension: &str) -> Option<Arc<dyn ScriptEngineFactory>>;
}

/// Thread-safe in-memory engine registry
pub struct InMemoryEngineRegistry {
    factories: RwLock<Vec<Arc<dyn ScriptEngineFactory>>>,
}

impl InMemoryEngineRegistry {
    pub fn new() -> Self {
        Self {
            factories: RwLock::new(Vec::new()),
        }
    }

    pub fn register(&self, factory: Arc<dyn ScriptEngineFactory>) {
        let mut factories = self.factories.write().unwrap();
        factories.push(factory);
    }

    pub fn factory_count(&self) -> usize {
        let factories = self.factories.read().unwrap();
        factories.len()
    }
}

impl Default for InMemoryEngineRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineRegistry for InMemoryEngineRegistry {
    fn factories(&self) -> Vec<Arc<dyn ScriptEngineFactory>> {
        let factories = self.factories.read().unwrap();
        factories.clone()
    }

    fn by_extension(&self, extension: &str) -> Option<Arc<dyn ScriptEngineFactory>> {
        let factories = self.factories.read().unwrap();
        factories
            .iter()
            .find(|f| f.extensions().iter().any(|e| e == extension))
            .cloned()
    }
}
