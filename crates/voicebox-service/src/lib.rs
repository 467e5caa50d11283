//! # voicebox-service
//!
//! Application layer: request/response DTOs and the services implementing
//! the feedback lifecycle, community feed, and admin aggregation.

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::{
    AdminService, CommunityService, FeedbackService, ProgressService, ServiceContext,
    ServiceError, ServiceResult,
};
