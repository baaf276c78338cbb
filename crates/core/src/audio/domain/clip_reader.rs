use std::path::Path;

use super::audio_clip::AudioClip;

/// Domain interface for decoding a recorded clip from disk.
///
/// Implementations produce mono 16-bit PCM regardless of container layout.
pub trait ClipReader {
    fn read_clip(&self, path: &Path) -> Result<AudioClip, Box<dyn std::error::Error>>;
}
