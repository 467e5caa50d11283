//! Sentiment and status labels
//!
//! Serialized with their human-readable names ("In Progress", "Positive", ...)
//! because the same representation is stored and returned on the wire.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Heuristically derived sentiment of a feedback text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolution status of a feedback item
///
/// Transitions are admin-triggered and unordered: any status is reachable
/// from any other, including moving out of `Resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackStatus {
    Received,
    Investigating,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl FeedbackStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "Received",
            Self::Investigating => "Investigating",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
