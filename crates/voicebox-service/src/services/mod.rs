//! Service layer - use-case implementations over the key-value store

mod admin;
mod community;
mod context;
mod error;
mod feedback;
mod progress;

pub use admin::AdminService;
pub use community::CommunityService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use feedback::FeedbackService;
pub use progress::ProgressService;
