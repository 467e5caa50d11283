//! Test fixtures and wire-format mirrors
//!
//! Request builders plus `Deserialize` mirrors of the API's camelCase
//! response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Feedback submission request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedback {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub is_anonymous: bool,
}

impl SubmitFeedback {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            category: None,
            is_anonymous: true,
        }
    }

    pub fn with_category(text: &str, category: &str) -> Self {
        Self {
            text: text.to_string(),
            category: Some(category.to_string()),
            is_anonymous: true,
        }
    }
}

/// Session message request
pub fn message_body(message: &str, is_admin: bool) -> serde_json::Value {
    json!({ "message": message, "isAdmin": is_admin })
}

/// Status update request
pub fn status_body(status: &str, note: Option<&str>) -> serde_json::Value {
    match note {
        Some(note) => json!({ "status": status, "note": note }),
        None => json!({ "status": status }),
    }
}

/// Submission response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub session_id: String,
    pub analysis: AnalysisBody,
}

#[derive(Debug, Deserialize)]
pub struct AnalysisBody {
    pub topic: String,
    pub sentiment: String,
}

/// Session view response
#[derive(Debug, Deserialize)]
pub struct SessionView {
    pub feedback: FeedbackBody,
    pub messages: Vec<MessageBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackBody {
    pub session_id: String,
    pub text: String,
    pub category: String,
    pub sentiment: String,
    pub timestamp: DateTime<Utc>,
    pub status: String,
    pub is_anonymous: bool,
    #[serde(default)]
    pub admin_note: Option<String>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub upvotes: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageBody {
    pub id: String,
    pub message: String,
    pub is_admin: bool,
    pub timestamp: DateTime<Utc>,
}

/// Posted-message acknowledgement
#[derive(Debug, Deserialize)]
pub struct MessageAck {
    pub message: MessageBody,
}

/// Community feed response
#[derive(Debug, Deserialize)]
pub struct CommunityFeed {
    pub posts: Vec<PostBody>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostBody {
    pub id: String,
    pub text: String,
    pub category: String,
    pub sentiment: String,
    pub timestamp: DateTime<Utc>,
    pub upvotes: u64,
    pub is_visible: bool,
}

/// Upvote acknowledgement
#[derive(Debug, Deserialize)]
pub struct UpvoteAck {
    pub upvotes: u64,
}

/// Dashboard response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub statistics: DashboardStats,
    pub recent_feedback: Vec<FeedbackBody>,
    pub trends: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_feedback: usize,
    pub sentiment_counts: serde_json::Value,
    pub category_counts: std::collections::BTreeMap<String, u64>,
    pub status_counts: std::collections::BTreeMap<String, u64>,
}

/// Progress tracker response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub issues_by_status: std::collections::BTreeMap<String, Vec<serde_json::Value>>,
    pub categories: Vec<String>,
}

/// Error body shared by all failure responses
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}
