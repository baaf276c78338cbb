use std::path::{Path, PathBuf};

use hound::SampleFormat;
use thiserror::Error;

use crate::audio::domain::audio_clip::AudioClip;
use crate::audio::domain::clip_reader::ClipReader;

#[derive(Error, Debug)]
pub enum ClipReadError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },
    #[error("unsupported sample format: expected 16-bit integer PCM, got {bits}-bit {format}")]
    UnsupportedFormat { bits: u16, format: &'static str },
    #[error("unsupported channel count: {0} (expected mono or stereo)")]
    UnsupportedChannels(u16),
    #[error("failed to decode samples from {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },
}

/// WAV decoder producing mono 16-bit PCM clips.
///
/// Stereo input is downmixed by averaging channel pairs. Anything other
/// than integer 16-bit samples is rejected with a descriptive error.
pub struct WavClipReader;

impl WavClipReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WavClipReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipReader for WavClipReader {
    fn read_clip(&self, path: &Path) -> Result<AudioClip, Box<dyn std::error::Error>> {
        let mut reader = hound::WavReader::open(path).map_err(|e| ClipReadError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;
        let spec = reader.spec();

        if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
            let format = match spec.sample_format {
                SampleFormat::Int => "integer",
                SampleFormat::Float => "float",
            };
            return Err(ClipReadError::UnsupportedFormat {
                bits: spec.bits_per_sample,
                format,
            }
            .into());
        }

        let samples: Vec<i16> = reader
            .samples::<i16>()
            .collect::<Result<_, _>>()
            .map_err(|e| ClipReadError::Decode {
                path: path.to_path_buf(),
                source: e,
            })?;

        let frames = match spec.channels {
            1 => samples,
            2 => downmix_stereo(&samples),
            n => return Err(ClipReadError::UnsupportedChannels(n).into()),
        };

        log::debug!(
            "Decoded {} frames at {} Hz from {}",
            frames.len(),
            spec.sample_rate,
            path.display()
        );

        Ok(AudioClip::new(frames, spec.sample_rate))
    }
}

fn downmix_stereo(samples: &[i16]) -> Vec<i16> {
    samples
        .chunks_exact(2)
        .map(|pair| ((pair[0] as i32 + pair[1] as i32) / 2) as i16)
        .collect()
}
