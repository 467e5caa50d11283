//! Capability traits (ports) - the interface the domain expects from storage

mod store;

pub use store::{get_json, keys, set_json, KvStore, StoreResult};
