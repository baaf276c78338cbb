pub mod analyze_transcript_use_case;
pub mod transcribe_clip_use_case;
