use std::path::Path;

use serde::Serialize;

use crate::audio::domain::clip_reader::ClipReader;
use crate::recognition::domain::incremental_recognizer::RecognizerFactory;
use crate::recognition::domain::language::Language;
use crate::shared::constants::CHUNK_FRAMES;

/// Result of one transcription run.
///
/// Failures are carried as data so downstream consumers can distinguish a
/// real transcript from an error message; only `Transcribed` text is ever
/// analyzed or recorded in the session history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text")]
pub enum TranscriptionOutcome {
    Transcribed(String),
    NoAudio,
    Failed(String),
}

/// Streaming transcription orchestrator.
///
/// Feeds a decoded clip to an incremental recognizer in fixed-size chunks,
/// collecting each finalized segment, then flushes the trailing partial
/// segment and joins everything into one transcript.
pub struct TranscribeClipUseCase {
    reader: Box<dyn ClipReader>,
    recognizers: Box<dyn RecognizerFactory>,
}

impl TranscribeClipUseCase {
    pub fn new(reader: Box<dyn ClipReader>, recognizers: Box<dyn RecognizerFactory>) -> Self {
        Self {
            reader,
            recognizers,
        }
    }

    pub fn run(&mut self, audio_path: Option<&Path>, language: Language) -> TranscriptionOutcome {
        let path = match audio_path {
            Some(p) => p,
            None => return TranscriptionOutcome::NoAudio,
        };

        match self.transcribe(path, language) {
            Ok(transcript) => TranscriptionOutcome::Transcribed(transcript),
            Err(e) => {
                log::warn!("Transcription of {} failed: {e}", path.display());
                TranscriptionOutcome::Failed(format!("Transcription error: {e}"))
            }
        }
    }

    fn transcribe(
        &mut self,
        path: &Path,
        language: Language,
    ) -> Result<String, Box<dyn std::error::Error>> {
        let clip = self.reader.read_clip(path)?;
        let mut recognizer = self.recognizers.create(language, clip.sample_rate())?;

        let mut segments = Vec::new();
        for chunk in clip.chunks(CHUNK_FRAMES) {
            if let Some(text) = recognizer.accept_frames(chunk)? {
                segments.push(text);
            }
        }
        if let Some(text) = recognizer.finalize()? {
            segments.push(text);
        }

        log::debug!(
            "Transcribed {:.1}s clip into {} segment(s)",
            clip.duration(),
            segments.len()
        );
        Ok(segments.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::domain::audio_clip::AudioClip;
    use crate::recognition::domain::incremental_recognizer::IncrementalRecognizer;
    use std::cell::RefCell;
    use std::rc::Rc;

    // ─── Stubs ───

    struct StubClipReader {
        clip: Option<AudioClip>,
    }

    impl ClipReader for StubClipReader {
        fn read_clip(&self, _: &Path) -> Result<AudioClip, Box<dyn std::error::Error>> {
            self.clip
                .clone()
                .ok_or_else(|| "failed to open audio container".into())
        }
    }

    /// Finalizes a segment every `finalize_every` chunks, recording chunk sizes.
    struct StubRecognizer {
        finalize_every: usize,
        chunks_seen: usize,
        segments_emitted: usize,
        flush_text: Option<String>,
        chunk_sizes: Rc<RefCell<Vec<usize>>>,
    }

    impl IncrementalRecognizer for StubRecognizer {
        fn accept_frames(
            &mut self,
            frames: &[i16],
        ) -> Result<Option<String>, Box<dyn std::error::Error>> {
            self.chunk_sizes.borrow_mut().push(frames.len());
            self.chunks_seen += 1;
            if self.chunks_seen % self.finalize_every == 0 {
                self.segments_emitted += 1;
                Ok(Some(format!("segment{}", self.segments_emitted)))
            } else {
                Ok(None)
            }
        }

        fn finalize(&mut self) -> Result<Option<String>, Box<dyn std::error::Error>> {
            Ok(self.flush_text.clone())
        }
    }

    struct StubFactory {
        finalize_every: usize,
        flush_text: Option<String>,
        chunk_sizes: Rc<RefCell<Vec<usize>>>,
        requested: Rc<RefCell<Vec<(Language, u32)>>>,
        fail: bool,
    }

    impl RecognizerFactory for StubFactory {
        fn create(
            &mut self,
            language: Language,
            sample_rate: u32,
        ) -> Result<Box<dyn IncrementalRecognizer>, Box<dyn std::error::Error>> {
            if self.fail {
                return Err("failed to load model bundle".into());
            }
            self.requested.borrow_mut().push((language, sample_rate));
            Ok(Box::new(StubRecognizer {
                finalize_every: self.finalize_every,
                chunks_seen: 0,
                segments_emitted: 0,
                flush_text: self.flush_text.clone(),
                chunk_sizes: self.chunk_sizes.clone(),
            }))
        }
    }

    fn use_case_with(
        clip: Option<AudioClip>,
        finalize_every: usize,
        flush_text: Option<&str>,
        fail: bool,
    ) -> (
        TranscribeClipUseCase,
        Rc<RefCell<Vec<usize>>>,
        Rc<RefCell<Vec<(Language, u32)>>>,
    ) {
        let chunk_sizes = Rc::new(RefCell::new(Vec::new()));
        let requested = Rc::new(RefCell::new(Vec::new()));
        let uc = TranscribeClipUseCase::new(
            Box::new(StubClipReader { clip }),
            Box::new(StubFactory {
                finalize_every,
                flush_text: flush_text.map(String::from),
                chunk_sizes: chunk_sizes.clone(),
                requested: requested.clone(),
                fail,
            }),
        );
        (uc, chunk_sizes, requested)
    }

    #[test]
    fn test_no_audio_path_yields_no_audio() {
        let (mut uc, _, _) = use_case_with(None, 1, None, false);
        assert_eq!(uc.run(None, Language::English), TranscriptionOutcome::NoAudio);
    }

    #[test]
    fn test_segments_joined_with_spaces_in_order() {
        // 3 full chunks, a segment finalized on every chunk, plus a flush
        let clip = AudioClip::new(vec![0; CHUNK_FRAMES * 3], 16000);
        let (mut uc, _, _) = use_case_with(Some(clip), 1, Some("tail"), false);

        let outcome = uc.run(Some(Path::new("clip.wav")), Language::English);
        assert_eq!(
            outcome,
            TranscriptionOutcome::Transcribed("segment1 segment2 segment3 tail".to_string())
        );
    }

    #[test]
    fn test_clip_fed_in_fixed_chunks() {
        let clip = AudioClip::new(vec![0; CHUNK_FRAMES * 2 + 1500], 16000);
        let (mut uc, chunk_sizes, _) = use_case_with(Some(clip), 10, None, false);

        uc.run(Some(Path::new("clip.wav")), Language::English);
        assert_eq!(*chunk_sizes.borrow(), vec![CHUNK_FRAMES, CHUNK_FRAMES, 1500]);
    }

    #[test]
    fn test_recognizer_bound_to_clip_rate_and_language() {
        let clip = AudioClip::new(vec![0; CHUNK_FRAMES], 44100);
        let (mut uc, _, requested) = use_case_with(Some(clip), 10, None, false);

        uc.run(Some(Path::new("clip.wav")), Language::French);
        assert_eq!(*requested.borrow(), vec![(Language::French, 44100)]);
    }

    #[test]
    fn test_flush_only_transcript() {
        // Recognizer never finalizes mid-stream; all text comes from the flush
        let clip = AudioClip::new(vec![0; CHUNK_FRAMES * 2], 16000);
        let (mut uc, _, _) = use_case_with(Some(clip), 100, Some("only flush"), false);

        let outcome = uc.run(Some(Path::new("clip.wav")), Language::English);
        assert_eq!(
            outcome,
            TranscriptionOutcome::Transcribed("only flush".to_string())
        );
    }

    #[test]
    fn test_silent_clip_yields_empty_transcript() {
        let clip = AudioClip::new(vec![0; CHUNK_FRAMES], 16000);
        let (mut uc, _, _) = use_case_with(Some(clip), 100, None, false);

        let outcome = uc.run(Some(Path::new("clip.wav")), Language::English);
        assert_eq!(outcome, TranscriptionOutcome::Transcribed(String::new()));
    }

    #[test]
    fn test_unreadable_clip_fails_as_data() {
        let (mut uc, _, _) = use_case_with(None, 1, None, false);
        match uc.run(Some(Path::new("missing.wav")), Language::English) {
            TranscriptionOutcome::Failed(msg) => {
                assert!(msg.starts_with("Transcription error:"), "got: {msg}");
                assert!(msg.contains("audio container"), "got: {msg}");
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_model_failure_collapses_to_same_error_shape() {
        let clip = AudioClip::new(vec![0; CHUNK_FRAMES], 16000);
        let (mut uc, _, _) = use_case_with(Some(clip), 1, None, true);
        match uc.run(Some(Path::new("clip.wav")), Language::Spanish) {
            TranscriptionOutcome::Failed(msg) => {
                assert!(msg.starts_with("Transcription error:"), "got: {msg}");
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
