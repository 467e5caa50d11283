//! Trend bucket entity - daily per-topic submission counters

use serde::{Deserialize, Serialize};

use crate::value_objects::Sentiment;

/// Per-sentiment sub-counters of a trend bucket
///
/// Serialized with capitalized keys to match the stored/wire format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    #[serde(rename = "Positive")]
    pub positive: u64,
    #[serde(rename = "Neutral")]
    pub neutral: u64,
    #[serde(rename = "Negative")]
    pub negative: u64,
}

impl SentimentCounts {
    /// Increment the counter for one sentiment
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    /// Sum of all three counters
    #[must_use]
    pub fn total(&self) -> u64 {
        self.positive + self.neutral + self.negative
    }
}

/// Daily submission counter for one topic, keyed by (topic, date) in the store
///
/// Monotonically incremented on submission, never decremented - reopening a
/// resolved item does not touch trend history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendBucket {
    pub count: u64,
    pub sentiment: SentimentCounts,
}

impl TrendBucket {
    /// Record one submission with the given sentiment
    pub fn record(&mut self, sentiment: Sentiment) {
        self.count += 1;
        self.sentiment.record(sentiment);
    }
}
