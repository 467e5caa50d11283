//! Feedback entity - a submitted feedback item and its resolution state
//!
//! Serialized in camelCase because the same shape is written to the store
//! and returned on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::Analysis;
use crate::value_objects::{FeedbackStatus, Sentiment, SessionId};

/// Feedback entity
///
/// Created once at submission, mutated only by admin status/note updates,
/// never deleted. The upvote counter lives on the companion
/// [`CommunityPost`](crate::entities::CommunityPost), not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub session_id: SessionId,
    pub text: String,
    pub category: String,
    pub sentiment: Sentiment,
    pub timestamp: DateTime<Utc>,
    pub status: FeedbackStatus,
    pub is_anonymous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Feedback {
    /// Create a new feedback record from a submission
    ///
    /// The text is stored trimmed; status always starts at `Received`.
    pub fn new(
        session_id: SessionId,
        text: &str,
        analysis: &Analysis,
        is_anonymous: bool,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            session_id,
            text: text.trim().to_string(),
            category: analysis.topic.clone(),
            sentiment: analysis.sentiment,
            timestamp,
            status: FeedbackStatus::Received,
            is_anonymous,
            admin_note: None,
            last_updated: None,
        }
    }

    /// Apply an admin status update
    ///
    /// A note, when present, replaces the previous one and refreshes
    /// `last_updated`; a bare status change leaves both untouched.
    pub fn update_status(&mut self, status: FeedbackStatus, note: Option<String>) {
        self.status = status;
        if let Some(note) = note {
            self.admin_note = Some(note);
            self.last_updated = Some(Utc::now());
        }
    }

    /// Truncated text preview, safe on multi-byte boundaries
    pub fn preview(&self, max_chars: usize) -> String {
        if self.text.chars().count() <= max_chars {
            self.text.clone()
        } else {
            let truncated: String = self.text.chars().take(max_chars).collect();
            format!("{truncated}...")
        }
    }
}
