//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` with camelCase field names to
//! match the wire format the stored records already use.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use voicebox_core::{
    Analysis, CommunityPost, Feedback, SentimentCounts, SessionId, SessionMessage,
};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Successful submission: the session handle plus the derived labels
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackResponse {
    pub session_id: SessionId,
    pub analysis: Analysis,
}

/// Feedback record as returned inside a session view
///
/// The upvote count is derived from the community post, which owns the
/// counter; the stored feedback record has none.
#[derive(Debug, Serialize)]
pub struct SessionFeedback {
    #[serde(flatten)]
    pub feedback: Feedback,
    pub upvotes: u64,
}

/// Full session view: the feedback record and its conversation
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub feedback: SessionFeedback,
    pub messages: Vec<SessionMessage>,
}

/// Wrapper for a newly posted message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: SessionMessage,
}

/// Community feed page
#[derive(Debug, Serialize)]
pub struct CommunityResponse {
    pub posts: Vec<CommunityPost>,
    /// Matching posts before truncation to the page limit
    pub total: usize,
}

/// Upvote acknowledgement with the new counter value
#[derive(Debug, Serialize)]
pub struct UpvoteResponse {
    pub upvotes: u64,
}

/// Aggregate counts per status, keyed by display name on the wire
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct StatusCounts {
    #[serde(rename = "Received")]
    pub received: u64,
    #[serde(rename = "Investigating")]
    pub investigating: u64,
    #[serde(rename = "In Progress")]
    pub in_progress: u64,
    #[serde(rename = "Resolved")]
    pub resolved: u64,
}

/// Dashboard statistics block
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatistics {
    pub total_feedback: usize,
    pub sentiment_counts: SentimentCounts,
    pub category_counts: BTreeMap<String, u64>,
    pub status_counts: StatusCounts,
}

/// One point in a per-category trend series
#[derive(Debug, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub count: u64,
    pub sentiment: SentimentCounts,
}

/// Admin dashboard payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub statistics: DashboardStatistics,
    pub recent_feedback: Vec<Feedback>,
    /// Per-category time series, each sorted by date
    pub trends: BTreeMap<String, Vec<TrendPoint>>,
}

/// Status update acknowledgement
#[derive(Debug, Serialize)]
pub struct UpdateStatusResponse {
    pub success: bool,
}

/// One entry in a progress bucket; text truncated for display
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressItem {
    pub id: SessionId,
    pub text: String,
    pub category: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

/// The four fixed status buckets, keyed by display name on the wire
#[derive(Debug, Default, Serialize)]
pub struct IssuesByStatus {
    #[serde(rename = "Received")]
    pub received: Vec<ProgressItem>,
    #[serde(rename = "Investigating")]
    pub investigating: Vec<ProgressItem>,
    #[serde(rename = "In Progress")]
    pub in_progress: Vec<ProgressItem>,
    #[serde(rename = "Resolved")]
    pub resolved: Vec<ProgressItem>,
}

impl IssuesByStatus {
    /// Total number of bucketed items
    #[must_use]
    pub fn total(&self) -> usize {
        self.received.len() + self.investigating.len() + self.in_progress.len() + self.resolved.len()
    }
}

/// Progress tracker payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub issues_by_status: IssuesByStatus,
    /// Distinct categories across all feedback, sorted
    pub categories: Vec<String>,
}
