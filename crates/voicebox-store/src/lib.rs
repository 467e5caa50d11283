//! # voicebox-store
//!
//! Implementations of the [`KvStore`](voicebox_core::KvStore) capability
//! trait: a process-local in-memory map (used in development and tests) and
//! a Redis backend with pooled connections and cursor-based prefix scans.

pub mod memory;
pub mod pool;
pub mod redis;

pub use memory::MemoryKvStore;
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};
pub use redis::RedisKvStore;
