//! Keyword-based text analysis
//!
//! Maps free-text feedback to a topic label and a sentiment label using the
//! fixed lexicon in [`lexicon`]. Deterministic, no external calls; intended
//! to be swappable for a real classifier behind the same signature.

mod lexicon;

pub use lexicon::{FALLBACK_TOPIC, NEGATIVE_WORDS, POSITIVE_WORDS, TOPIC_KEYWORDS};

use serde::{Deserialize, Serialize};

use crate::value_objects::Sentiment;

/// Result of analyzing a feedback text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub topic: String,
    pub sentiment: Sentiment,
}

/// Analyze a feedback text, optionally constrained by a user-supplied category.
///
/// A supplied category is taken verbatim as the topic without validation
/// against the known set; sentiment is always derived from the text.
#[must_use]
pub fn analyze_text(text: &str, category: Option<&str>) -> Analysis {
    let lowercase = text.to_lowercase();

    let topic = match category {
        Some(c) => c.to_string(),
        None => detect_topic(&lowercase).to_string(),
    };

    Analysis {
        topic,
        sentiment: score_sentiment(&lowercase),
    }
}

/// First topic whose keyword list matches the lowercased text
fn detect_topic(lowercase: &str) -> &'static str {
    TOPIC_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowercase.contains(k)))
        .map_or(FALLBACK_TOPIC, |(topic, _)| topic)
}

/// Count positive and negative tokens; strictly higher count wins, ties are Neutral.
///
/// A whitespace-separated token scores at most once per polarity even if it
/// contains several lexicon words.
fn score_sentiment(lowercase: &str) -> Sentiment {
    let mut positive = 0u32;
    let mut negative = 0u32;

    for word in lowercase.split_whitespace() {
        if POSITIVE_WORDS.iter().any(|p| word.contains(p)) {
            positive += 1;
        }
        if NEGATIVE_WORDS.iter().any(|n| word.contains(n)) {
            negative += 1;
        }
    }

    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
