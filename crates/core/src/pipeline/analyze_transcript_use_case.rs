use serde::Serialize;

use crate::analytics::domain::sentiment::{SentimentAnalyzer, SentimentReading};
use crate::analytics::domain::summarizer::Summarizer;
use crate::analytics::domain::text_stats::TextStats;
use crate::shared::constants::{
    MAX_SUMMARY_SENTENCES, MIN_SUMMARY_SENTENCES, NO_AUDIO_MESSAGE,
};

use super::transcribe_clip_use_case::TranscriptionOutcome;

/// Everything derived from one transcription run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptReport {
    /// The transcript, present only when transcription succeeded.
    pub transcript: Option<String>,
    /// Failure or no-audio message shown in place of a transcript.
    pub notice: Option<String>,
    pub stats: TextStats,
    pub sentiment: SentimentReading,
    pub summary: Option<String>,
}

impl TranscriptReport {
    fn unavailable(notice: String) -> Self {
        Self {
            transcript: None,
            notice: Some(notice),
            stats: TextStats::default(),
            sentiment: SentimentReading::NotApplicable,
            summary: None,
        }
    }
}

/// Fans one transcription outcome out to the independent analytics steps.
///
/// Failure and no-audio outcomes are never analyzed: their message rides in
/// `notice` while the analytics fields hold not-applicable values, so an
/// error string can't show up word-counted or sentiment-scored.
pub struct AnalyzeTranscriptUseCase {
    sentiment: Box<dyn SentimentAnalyzer>,
    summarizer: Box<dyn Summarizer>,
}

impl AnalyzeTranscriptUseCase {
    pub fn new(sentiment: Box<dyn SentimentAnalyzer>, summarizer: Box<dyn Summarizer>) -> Self {
        Self {
            sentiment,
            summarizer,
        }
    }

    pub fn run(&self, outcome: &TranscriptionOutcome, summary_sentences: usize) -> TranscriptReport {
        let transcript = match outcome {
            TranscriptionOutcome::Transcribed(text) => text,
            TranscriptionOutcome::NoAudio => {
                return TranscriptReport::unavailable(NO_AUDIO_MESSAGE.to_string());
            }
            TranscriptionOutcome::Failed(message) => {
                return TranscriptReport::unavailable(message.clone());
            }
        };

        let sentences = summary_sentences.clamp(MIN_SUMMARY_SENTENCES, MAX_SUMMARY_SENTENCES);
        TranscriptReport {
            transcript: Some(transcript.clone()),
            notice: None,
            stats: TextStats::of(transcript),
            sentiment: self.sentiment.analyze(transcript),
            summary: Some(self.summarizer.summarize(transcript, sentences)),
        }
    }
}
