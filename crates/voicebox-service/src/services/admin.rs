//! Admin service
//!
//! Read-side aggregation for the dashboard: counts, recent submissions,
//! and per-category trend series.

use std::collections::BTreeMap;

use tracing::{instrument, warn};

use voicebox_core::{keys, DomainError, Feedback, FeedbackStatus, TrendBucket};

use crate::dto::{DashboardResponse, DashboardStatistics, StatusCounts, TrendPoint};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Number of entries in the recent-feedback list
const RECENT_LIMIT: usize = 10;

/// Admin aggregation service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Build the dashboard payload from full scans of feedback and trends
    #[instrument(skip(self))]
    pub async fn dashboard(&self) -> ServiceResult<DashboardResponse> {
        let store = self.ctx.store();

        let mut feedback = Vec::new();
        for (_, value) in store.scan_prefix(keys::FEEDBACK_PREFIX).await? {
            let record: Feedback = serde_json::from_value(value).map_err(DomainError::from)?;
            feedback.push(record);
        }

        let statistics = build_statistics(&feedback);

        feedback.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        feedback.truncate(RECENT_LIMIT);

        let trends = self.trend_series().await?;

        Ok(DashboardResponse {
            statistics,
            recent_feedback: feedback,
            trends,
        })
    }

    /// Reshape trend buckets into per-category series sorted by date
    async fn trend_series(&self) -> ServiceResult<BTreeMap<String, Vec<TrendPoint>>> {
        let mut series: BTreeMap<String, Vec<TrendPoint>> = BTreeMap::new();

        for (key, value) in self.ctx.store().scan_prefix(keys::TRENDS_PREFIX).await? {
            let Some((topic, date)) = keys::parse_trend(&key) else {
                warn!(key = %key, "Skipping malformed trend key");
                continue;
            };
            let bucket: TrendBucket = serde_json::from_value(value).map_err(DomainError::from)?;

            series.entry(topic.to_string()).or_default().push(TrendPoint {
                date: date.to_string(),
                count: bucket.count,
                sentiment: bucket.sentiment,
            });
        }

        for points in series.values_mut() {
            points.sort_by(|a, b| a.date.cmp(&b.date));
        }

        Ok(series)
    }
}

/// Aggregate counts across all feedback records
fn build_statistics(feedback: &[Feedback]) -> DashboardStatistics {
    let mut sentiment_counts = voicebox_core::SentimentCounts::default();
    let mut category_counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut status_counts = StatusCounts::default();

    for record in feedback {
        sentiment_counts.record(record.sentiment);
        *category_counts.entry(record.category.clone()).or_default() += 1;
        match record.status {
            FeedbackStatus::Received => status_counts.received += 1,
            FeedbackStatus::Investigating => status_counts.investigating += 1,
            FeedbackStatus::InProgress => status_counts.in_progress += 1,
            FeedbackStatus::Resolved => status_counts.resolved += 1,
        }
    }

    DashboardStatistics {
        total_feedback: feedback.len(),
        sentiment_counts,
        category_counts,
        status_counts,
    }
}
