//! Session message entity - one entry in the anonymous two-way conversation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::MessageId;

/// A message exchanged within a feedback session
///
/// Messages are append-only; the list for a session is created empty at
/// submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMessage {
    pub id: MessageId,
    pub message: String,
    pub is_admin: bool,
    pub timestamp: DateTime<Utc>,
}

impl SessionMessage {
    /// Create a new message; the text is stored trimmed
    pub fn new(id: MessageId, message: &str, is_admin: bool) -> Self {
        Self {
            id,
            message: message.trim().to_string(),
            is_admin,
            timestamp: Utc::now(),
        }
    }
}
