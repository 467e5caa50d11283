//! Request handlers organized by endpoint group

pub mod admin;
pub mod community;
pub mod feedback;
pub mod health;
pub mod progress;
pub mod session;
