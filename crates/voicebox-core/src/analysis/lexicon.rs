//! Static keyword lexicon for topic and sentiment scoring
//!
//! Topics are evaluated in priority order; the first topic with a matching
//! keyword wins. All matching is case-insensitive substring containment
//! against the lowercased input.

/// Topic assigned when no keyword matches and no category is supplied
pub const FALLBACK_TOPIC: &str = "Other";

/// Ordered (topic, keywords) pairs, highest priority first
pub const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    ("Academic", &["class", "professor", "study", "grade"]),
    ("Campus Safety", &["safety", "security", "emergency"]),
    ("Dining", &["food", "dining", "cafeteria", "meal"]),
    ("Housing", &["dorm", "housing", "room", "residence"]),
    ("IT/Technology", &["wifi", "internet", "computer", "technology"]),
    ("Mental Health", &["stress", "anxiety", "mental", "counseling"]),
    ("Transportation", &["parking", "bus", "transport", "traffic"]),
];

/// Words whose presence in a token counts toward a positive score
pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "helpful",
    "love",
    "like",
    "happy",
    "satisfied",
    "thank",
];

/// Words whose presence in a token counts toward a negative score
pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "hate",
    "dislike",
    "frustrated",
    "angry",
    "disappointed",
    "problem",
    "issue",
    "broken",
    "slow",
];
