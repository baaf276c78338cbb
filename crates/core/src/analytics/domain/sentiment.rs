use serde::Serialize;

use crate::shared::constants::SENTIMENT_NEUTRAL_BAND;

/// Coarse sentiment classification derived from polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > SENTIMENT_NEUTRAL_BAND {
            SentimentLabel::Positive
        } else if polarity < -SENTIMENT_NEUTRAL_BAND {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Negative => write!(f, "Negative"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentScore {
    /// Overall polarity in [-1, 1].
    pub polarity: f64,
    /// Strength of opinionated content in [0, 1].
    pub subjectivity: f64,
    pub label: SentimentLabel,
}

impl SentimentScore {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity,
            subjectivity,
            label: SentimentLabel::from_polarity(polarity),
        }
    }
}

/// Sentiment result for a transcript. Blank input has no sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum SentimentReading {
    NotApplicable,
    Scored(SentimentScore),
}

/// Domain interface for lexicon-based sentiment scoring.
pub trait SentimentAnalyzer {
    fn analyze(&self, text: &str) -> SentimentReading;
}
