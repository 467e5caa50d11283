//! Service context - dependency container for services
//!
//! Holds the key-value store handle and the id generator; passed by
//! reference into every service.

use std::sync::Arc;

use voicebox_core::{IdGenerator, KvStore};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    store: Arc<dyn KvStore>,
    ids: Arc<IdGenerator>,
}

impl ServiceContext {
    /// Create a new service context over a store
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            ids: Arc::new(IdGenerator::new()),
        }
    }

    /// Get the key-value store
    pub fn store(&self) -> &dyn KvStore {
        self.store.as_ref()
    }

    /// Get the id generator
    pub fn ids(&self) -> &IdGenerator {
        &self.ids
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("store", &"dyn KvStore")
            .finish()
    }
}
