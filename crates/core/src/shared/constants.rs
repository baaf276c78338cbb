/// Frames fed to the recognizer per step.
pub const CHUNK_FRAMES: usize = 4000;

/// Max transcripts retained in a session.
pub const HISTORY_CAPACITY: usize = 5;

pub const MIN_SUMMARY_SENTENCES: usize = 1;
pub const MAX_SUMMARY_SENTENCES: usize = 5;

/// Polarity above this is labeled Positive; below its negation, Negative.
pub const SENTIMENT_NEUTRAL_BAND: f64 = 0.2;

pub const NO_AUDIO_MESSAGE: &str = "No audio file uploaded";
pub const NOTHING_TO_SUMMARIZE_MESSAGE: &str = "Nothing to summarize";
pub const SUMMARY_FALLBACK_MESSAGE: &str = "Transcript too short to summarize";

/// Subdirectory of the user cache dir holding unpacked model bundles.
pub const MODEL_CACHE_APP_DIR: &str = "talknotes";
