//! Progress service
//!
//! Public issue tracker: feedback grouped by status with short previews,
//! optionally filtered by category.

use tracing::instrument;

use voicebox_core::{keys, DomainError, Feedback, FeedbackStatus};

use crate::dto::{IssuesByStatus, ProgressItem, ProgressQuery, ProgressResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Maximum characters of feedback text shown in a progress item
const PREVIEW_CHARS: usize = 100;

/// Public progress-tracking service
pub struct ProgressService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProgressService<'a> {
    /// Create a new ProgressService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Group all feedback by status, newest first within each bucket
    #[instrument(skip(self))]
    pub async fn by_status(&self, query: ProgressQuery) -> ServiceResult<ProgressResponse> {
        let mut feedback = Vec::new();
        for (_, value) in self.ctx.store().scan_prefix(keys::FEEDBACK_PREFIX).await? {
            let record: Feedback = serde_json::from_value(value).map_err(DomainError::from)?;
            feedback.push(record);
        }

        // Category list reflects everything on file, not just the filter
        let mut categories: Vec<String> =
            feedback.iter().map(|f| f.category.clone()).collect();
        categories.sort();
        categories.dedup();

        if let Some(category) = query.category.as_deref() {
            feedback.retain(|f| f.category == category);
        }
        feedback.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let mut issues = IssuesByStatus::default();
        for record in feedback {
            let item = to_item(&record);
            match record.status {
                FeedbackStatus::Received => issues.received.push(item),
                FeedbackStatus::Investigating => issues.investigating.push(item),
                FeedbackStatus::InProgress => issues.in_progress.push(item),
                FeedbackStatus::Resolved => issues.resolved.push(item),
            }
        }

        Ok(ProgressResponse {
            issues_by_status: issues,
            categories,
        })
    }
}

fn to_item(record: &Feedback) -> ProgressItem {
    ProgressItem {
        id: record.session_id.clone(),
        text: record.preview(PREVIEW_CHARS),
        category: record.category.clone(),
        timestamp: record.timestamp,
        admin_note: record.admin_note.clone(),
        last_updated: record.last_updated,
    }
}
