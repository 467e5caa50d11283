//! In-memory key-value store
//!
//! Backed by a concurrent map. Single-process only; data is lost on restart.
//! This is the default backend for local development and the one the
//! integration tests run against.

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use voicebox_core::{KvStore, StoreResult};

/// Process-local [`KvStore`] implementation
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: DashMap<String, Value>,
}

impl MemoryKvStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn scan_prefix(&self, prefix: &str) -> StoreResult<Vec<(String, Value)>> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect())
    }
}
