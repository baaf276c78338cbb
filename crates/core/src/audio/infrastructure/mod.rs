pub mod wav_clip_reader;
