pub mod audio_clip;
pub mod clip_reader;
