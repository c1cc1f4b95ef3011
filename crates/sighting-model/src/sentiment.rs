//! Sentiment labels for pre-computed polarity scores.
//!
//! Polarity scoring itself happens upstream in an NLP step; reports carry the
//! resulting compound score in `[-1, 1]` and this module only buckets it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compound-score magnitude separating neutral from polar text.
pub const DEFAULT_SENTIMENT_THRESHOLD: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

impl SentimentLabel {
    /// Classify a polarity score: `>= threshold` is positive, `<= -threshold`
    /// is negative, anything in between is neutral.
    pub fn classify(polarity: f64, threshold: f64) -> Self {
        if polarity >= threshold {
            SentimentLabel::Positive
        } else if polarity <= -threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Positive => "positive",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
