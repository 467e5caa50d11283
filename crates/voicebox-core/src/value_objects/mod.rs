//! Value objects - immutable types that represent domain concepts

mod ids;
mod labels;

pub use ids::{IdGenerator, MessageId, SessionId};
pub use labels::{FeedbackStatus, Sentiment};
