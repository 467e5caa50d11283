//! Redis-backed key-value store
//!
//! Values are stored as JSON strings. Prefix scans use cursor-based SCAN and
//! a single MGET; a scan sees no consistent snapshot while writes are in
//! flight, which matches the store contract.

use async_trait::async_trait;
use redis::AsyncCommands;
use serde_json::Value;

use voicebox_core::{DomainError, KvStore, StoreResult};

use crate::pool::{RedisPool, RedisPoolError};

/// COUNT hint for SCAN iterations
const SCAN_BATCH: usize = 100;

/// Redis [`KvStore`] implementation over a pooled connection
#[derive(Debug, Clone)]
pub struct RedisKvStore {
    pool: RedisPool,
}

impl RedisKvStore {
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }
}

impl From<RedisPoolError> for DomainError {
    fn from(err: RedisPoolError) -> Self {
        DomainError::storage(err.to_string())
    }
}

#[async_trait]
impl KvStore for RedisKvStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        let mut conn = self.pool.get().await.map_err(DomainError::from)?;
        let raw: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        match raw {
            Some(s) => Ok(Some(serde_json::from_str(&s)?)),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        let mut conn = self.pool.get().await.map_err(DomainError::from)?;
        let serialized = serde_json::to_string(&value)?;
        conn.set::<_, _, ()>(key, serialized)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;
        Ok(())
    }

    async fn scan_prefix(&self, prefix: &str) -> StoreResult<Vec<(String, Value)>> {
        let pattern = format!("{prefix}*");
        let keys = self
            .pool
            .scan_keys(&pattern, SCAN_BATCH)
            .await
            .map_err(DomainError::from)?;

        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.pool.get().await.map_err(DomainError::from)?;
        let values: Vec<Option<String>> = conn
            .mget(&keys)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        let mut pairs = Vec::with_capacity(keys.len());
        for (key, raw) in keys.into_iter().zip(values) {
            // A key deleted between SCAN and MGET reads as None; skip it.
            if let Some(s) = raw {
                pairs.push((key, serde_json::from_str(&s)?));
            }
        }

        Ok(pairs)
    }
}
