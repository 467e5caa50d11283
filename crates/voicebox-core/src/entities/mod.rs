//! Domain entities - the stored record kinds

mod community;
mod feedback;
mod message;
mod trend;

pub use community::CommunityPost;
pub use feedback::Feedback;
pub use message::SessionMessage;
pub use trend::{SentimentCounts, TrendBucket};
