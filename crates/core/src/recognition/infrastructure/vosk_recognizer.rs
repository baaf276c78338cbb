use std::sync::Once;

use vosk::{DecodingState, Model, Recognizer};

use crate::recognition::domain::incremental_recognizer::{
    IncrementalRecognizer, RecognizerFactory,
};
use crate::recognition::domain::language::Language;

use super::model_cache::ModelCache;

static SILENCE_VOSK_LOGS: Once = Once::new();

/// Streaming recognizer backed by a Vosk/Kaldi decoder.
pub struct VoskRecognizer {
    inner: Recognizer,
}

impl VoskRecognizer {
    pub fn new(model: &Model, sample_rate: u32) -> Result<Self, Box<dyn std::error::Error>> {
        let inner = Recognizer::new(model, sample_rate as f32)
            .ok_or("Failed to create recognizer from model")?;
        Ok(Self { inner })
    }
}

impl IncrementalRecognizer for VoskRecognizer {
    fn accept_frames(
        &mut self,
        frames: &[i16],
    ) -> Result<Option<String>, Box<dyn std::error::Error>> {
        match self.inner.accept_waveform(frames) {
            Ok(DecodingState::Finalized) => {
                let text = self
                    .inner
                    .result()
                    .single()
                    .map(|r| r.text.to_string())
                    .unwrap_or_default();
                Ok(segment_text(text))
            }
            Ok(DecodingState::Running) => Ok(None),
            Ok(DecodingState::Failed) => Err("Recognizer failed to decode chunk".into()),
            Err(e) => Err(format!("Recognizer rejected waveform: {e}").into()),
        }
    }

    fn finalize(&mut self) -> Result<Option<String>, Box<dyn std::error::Error>> {
        let text = self
            .inner
            .final_result()
            .single()
            .map(|r| r.text.to_string())
            .unwrap_or_default();
        Ok(segment_text(text))
    }
}

fn segment_text(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Builds `VoskRecognizer`s on top of an explicit model cache.
pub struct VoskRecognizerFactory {
    cache: ModelCache,
}

impl VoskRecognizerFactory {
    pub fn new(cache: ModelCache) -> Self {
        SILENCE_VOSK_LOGS.call_once(|| {
            vosk::set_log_level(vosk::LogLevel::Error);
        });
        Self { cache }
    }

    pub fn cache_mut(&mut self) -> &mut ModelCache {
        &mut self.cache
    }
}

impl RecognizerFactory for VoskRecognizerFactory {
    fn create(
        &mut self,
        language: Language,
        sample_rate: u32,
    ) -> Result<Box<dyn IncrementalRecognizer>, Box<dyn std::error::Error>> {
        let model = self.cache.get_or_load(language)?;
        let recognizer = VoskRecognizer::new(&model, sample_rate)?;
        Ok(Box::new(recognizer))
    }
}
