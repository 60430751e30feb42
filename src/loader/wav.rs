//! WAV file clip loader backed by `hound`.

use std::path::{Path, PathBuf};

use super::ClipLoader;
use crate::error::BoxError;

/// Loads noise clips from WAV files.
///
/// Identifiers are file paths, resolved against an optional root directory.
/// Float and integer PCM are both accepted; integer samples are scaled to
/// [-1.0, 1.0). Only the first channel of multi-channel files is kept and no
/// sample rate conversion is performed.
///
/// # Examples
///
/// ```ignore
/// use noisemix::{ClipLoader, WavClipLoader};
///
/// let mut loader = WavClipLoader::with_root("/data/noise");
/// let samples = loader.load("babble/cafe_01.wav")?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct WavClipLoader {
    root: Option<PathBuf>,
}

impl WavClipLoader {
    /// Creates a loader that opens identifiers as given.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Creates a loader that resolves relative identifiers against `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, id: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(id),
            None => PathBuf::from(id),
        }
    }
}

impl ClipLoader for WavClipLoader {
    fn load(&mut self, id: &str) -> Result<Vec<f32>, BoxError> {
        read_first_channel(&self.resolve(id))
    }
}

/// Decodes the first channel of a WAV file into `f32` samples.
pub(crate) fn read_first_channel(path: &Path) -> Result<Vec<f32>, BoxError> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<Vec<f32>, hound::Error>>()?,
        hound::SampleFormat::Int => {
            let max_value = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_value))
                .collect::<Result<Vec<f32>, hound::Error>>()?
        }
    };

    if spec.channels > 1 {
        Ok(samples
            .into_iter()
            .step_by(spec.channels as usize)
            .collect())
    } else {
        Ok(samples)
    }
}
