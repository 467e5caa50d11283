//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; bodies additionally implement
//! `Validate` for input validation. Field names are camelCase on the wire.

use serde::Deserialize;
use validator::Validate;

use voicebox_core::FeedbackStatus;

/// Feedback submission request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackRequest {
    #[validate(length(min = 1, message = "Feedback text is required"))]
    pub text: String,

    /// Explicit topic; skips keyword detection when present
    pub category: Option<String>,

    #[serde(default = "default_true")]
    pub is_anonymous: bool,
}

/// New message within a session
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostMessageRequest {
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,

    #[serde(default)]
    pub is_admin: bool,
}

/// Admin status update request
///
/// Unknown status strings fail deserialization and surface as a 400.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub status: FeedbackStatus,

    #[validate(length(min = 1, message = "Note must not be empty when present"))]
    pub note: Option<String>,
}

/// Query parameters for the community feed
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommunityQuery {
    pub category: Option<String>,
    pub limit: Option<usize>,
}

/// Query parameters for the progress tracker
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgressQuery {
    pub category: Option<String>,
}

fn default_true() -> bool {
    true
}
