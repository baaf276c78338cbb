/// A decoded recording: mono 16-bit PCM frames at a known sample rate.
#[derive(Clone, Debug)]
pub struct AudioClip {
    frames: Vec<i16>,
    sample_rate: u32,
}

impl AudioClip {
    pub fn new(frames: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            frames,
            sample_rate,
        }
    }

    pub fn frames(&self) -> &[i16] {
        &self.frames
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn duration(&self) -> f64 {
        self.frames.len() as f64 / self.sample_rate as f64
    }

    /// Iterate the clip in fixed-size chunks; the last chunk may be shorter.
    pub fn chunks(&self, chunk_frames: usize) -> impl Iterator<Item = &[i16]> {
        self.frames.chunks(chunk_frames)
    }
}
