//! # voicebox-core
//!
//! Domain layer containing entities, value objects, the text analysis
//! lexicon, and the key-value store capability trait.
//! This crate has zero dependencies on infrastructure (storage, web framework, etc.).

pub mod analysis;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use analysis::{analyze_text, Analysis};
pub use entities::{CommunityPost, Feedback, SentimentCounts, SessionMessage, TrendBucket};
pub use error::DomainError;
pub use traits::{get_json, keys, set_json, KvStore, StoreResult};
pub use value_objects::{FeedbackStatus, IdGenerator, MessageId, Sentiment, SessionId};
