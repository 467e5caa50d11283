//! Session and message identifiers
//!
//! Ids are opaque strings of the form `session_<millis>_<suffix>` /
//! `msg_<millis>_<suffix>` where the suffix is nine random base-36 characters.
//! The wire format keeps them as plain strings.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

const SUFFIX_LEN: usize = 9;
const SUFFIX_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Identifier of a feedback session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap an existing id string (e.g. from a URL path)
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Identifier of a message within a session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generator for session and message ids
///
/// Combines a millisecond timestamp with a random suffix. Collisions within
/// the same millisecond are possible in principle but require two submissions
/// drawing the same nine-character suffix.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdGenerator;

impl IdGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generate a fresh session id
    pub fn session_id(&self) -> SessionId {
        SessionId(format!(
            "session_{}_{}",
            chrono::Utc::now().timestamp_millis(),
            random_suffix()
        ))
    }

    /// Generate a fresh message id
    pub fn message_id(&self) -> MessageId {
        MessageId(format!(
            "msg_{}_{}",
            chrono::Utc::now().timestamp_millis(),
            random_suffix()
        ))
    }
}

fn random_suffix() -> String {
    let mut rng = rand::thread_rng();
    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_format() {
        let id = IdGenerator::new().session_id();
        assert!(id.as_str().starts_with("session_"));
        let parts: Vec<&str> = id.as_str().splitn(3, '_').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), SUFFIX_LEN);
    }

    #[test]
    fn test_message_id_format() {
        let id = IdGenerator::new().message_id();
        assert!(id.as_str().starts_with("msg_"));
    }

    #[test]
    fn test_ids_are_unique() {
        let generator = IdGenerator::new();
        let a = generator.session_id();
        let b = generator.session_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_session_id_serde_transparent() {
        let id = SessionId::new("session_1_abc");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"session_1_abc\"");

        let back: SessionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
