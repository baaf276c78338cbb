use vader_sentiment::SentimentIntensityAnalyzer;

use crate::analytics::domain::sentiment::{SentimentAnalyzer, SentimentReading, SentimentScore};

/// Lexicon-based sentiment scoring via VADER.
///
/// Polarity is VADER's normalized compound score. VADER has no direct
/// subjectivity notion, so the non-neutral mass (pos + neg proportions)
/// stands in for it; both land in the ranges the report promises.
pub struct VaderAnalyzer;

impl VaderAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VaderAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer for VaderAnalyzer {
    fn analyze(&self, text: &str) -> SentimentReading {
        if text.trim().is_empty() {
            return SentimentReading::NotApplicable;
        }

        let analyzer = SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);
        let polarity = scores.get("compound").copied().unwrap_or(0.0);
        let pos = scores.get("pos").copied().unwrap_or(0.0);
        let neg = scores.get("neg").copied().unwrap_or(0.0);
        let subjectivity = (pos + neg).clamp(0.0, 1.0);

        SentimentReading::Scored(SentimentScore::new(polarity, subjectivity))
    }
}
