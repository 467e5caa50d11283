//! Key-value store capability trait
//!
//! The domain only requires `{get, set, scan_by_prefix}` over JSON values,
//! so any backing store (in-memory map, Redis, managed service) can satisfy
//! it. No consistency is assumed beyond single-key read-your-writes;
//! prefix scans are not isolated from concurrent writes.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::DomainError;
use crate::value_objects::SessionId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, DomainError>;

/// Minimal key-value store with prefix scan
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Get the value at `key`, or `None` if absent
    async fn get(&self, key: &str) -> StoreResult<Option<Value>>;

    /// Set `key` to `value`, overwriting any previous value
    async fn set(&self, key: &str, value: Value) -> StoreResult<()>;

    /// Return all `(key, value)` pairs whose key starts with `prefix`
    ///
    /// Order is unspecified; callers sort.
    async fn scan_prefix(&self, prefix: &str) -> StoreResult<Vec<(String, Value)>>;
}

/// Typed read through the store
pub async fn get_json<T: DeserializeOwned>(
    store: &dyn KvStore,
    key: &str,
) -> StoreResult<Option<T>> {
    match store.get(key).await? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

/// Typed write through the store
pub async fn set_json<T: Serialize>(store: &dyn KvStore, key: &str, value: &T) -> StoreResult<()> {
    store.set(key, serde_json::to_value(value)?).await
}

/// Key construction for the four record kinds
pub mod keys {
    use super::SessionId;

    pub const FEEDBACK_PREFIX: &str = "feedback:";
    pub const MESSAGES_PREFIX: &str = "messages:";
    pub const COMMUNITY_PREFIX: &str = "community:";
    pub const TRENDS_PREFIX: &str = "trends:";

    /// `feedback:{session_id}`
    pub fn feedback(session_id: &SessionId) -> String {
        format!("{FEEDBACK_PREFIX}{session_id}")
    }

    /// `messages:{session_id}`
    pub fn messages(session_id: &SessionId) -> String {
        format!("{MESSAGES_PREFIX}{session_id}")
    }

    /// `community:{post_id}`
    pub fn community(post_id: &str) -> String {
        format!("{COMMUNITY_PREFIX}{post_id}")
    }

    /// `trends:{topic}:{YYYY-MM-DD}`
    pub fn trend(topic: &str, date: &str) -> String {
        format!("{TRENDS_PREFIX}{topic}:{date}")
    }

    /// Split a trend key back into `(topic, date)`
    ///
    /// The topic itself may contain `:` (e.g. a user-supplied category), so
    /// the date is taken from the end.
    pub fn parse_trend(key: &str) -> Option<(&str, &str)> {
        let rest = key.strip_prefix(TRENDS_PREFIX)?;
        let (topic, date) = rest.rsplit_once(':')?;
        if topic.is_empty() || date.is_empty() {
            return None;
        }
        Some((topic, date))
    }
}
