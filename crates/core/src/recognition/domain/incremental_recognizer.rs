use super::language::Language;

/// Domain interface for stateful streaming speech recognition.
///
/// Callers feed successive chunks of mono 16-bit PCM; the recognizer
/// periodically finalizes a segment and reports its text.
pub trait IncrementalRecognizer {
    /// Feed a chunk of frames. Returns `Some(text)` when the recognizer
    /// finalized a segment on this chunk, `None` while it is still decoding.
    fn accept_frames(&mut self, frames: &[i16]) -> Result<Option<String>, Box<dyn std::error::Error>>;

    /// Flush the trailing partial segment after all audio has been fed.
    fn finalize(&mut self) -> Result<Option<String>, Box<dyn std::error::Error>>;
}

/// Creates recognizers bound to a language's model bundle and the clip's
/// sample rate. Owns whatever model state is shared between recognizers.
pub trait RecognizerFactory {
    fn create(
        &mut self,
        language: Language,
        sample_rate: u32,
    ) -> Result<Box<dyn IncrementalRecognizer>, Box<dyn std::error::Error>>;
}
