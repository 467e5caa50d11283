//! Community post entity - the publicly browsable projection of a submission

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Feedback;
use crate::value_objects::{Sentiment, SessionId};

/// Publicly visible, upvotable projection of a feedback submission
///
/// Shares its id with the feedback session. This entity is the single owner
/// of the upvote counter; the feedback record carries none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPost {
    pub id: SessionId,
    pub text: String,
    pub category: String,
    pub sentiment: Sentiment,
    pub timestamp: DateTime<Utc>,
    pub upvotes: u64,
    pub is_visible: bool,
}

impl CommunityPost {
    /// Project a feedback record into a community post with zero upvotes
    pub fn from_feedback(feedback: &Feedback) -> Self {
        Self {
            id: feedback.session_id.clone(),
            text: feedback.text.clone(),
            category: feedback.category.clone(),
            sentiment: feedback.sentiment,
            timestamp: feedback.timestamp,
            upvotes: 0,
            is_visible: true,
        }
    }

    /// Increment the upvote counter, returning the new value
    pub fn upvote(&mut self) -> u64 {
        self.upvotes += 1;
        self.upvotes
    }
}
