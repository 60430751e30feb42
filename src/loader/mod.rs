//! Noise clip loading.
//!
//! The mixer asks a [`ClipLoader`] to turn a corpus identifier into mono
//! float samples. Closures and in-memory maps are loaders too, which keeps
//! tests and synthetic corpora free of file I/O.

#[cfg(feature = "wav-loader")]
mod wav;

use std::collections::HashMap;

use crate::error::BoxError;

#[cfg(feature = "wav-loader")]
pub use wav::WavClipLoader;

/// Decodes a noise-source identifier into samples.
pub trait ClipLoader {
    /// Loads the clip named by `id`.
    ///
    /// Any decoding failure is returned as an error; the mixer reports it as
    /// [`SfxError::NoiseLoad`](crate::SfxError::NoiseLoad).
    fn load(&mut self, id: &str) -> Result<Vec<f32>, BoxError>;
}

impl<F> ClipLoader for F
where
    F: FnMut(&str) -> Result<Vec<f32>, BoxError>,
{
    fn load(&mut self, id: &str) -> Result<Vec<f32>, BoxError> {
        self(id)
    }
}

/// In-memory corpus keyed by identifier.
impl ClipLoader for HashMap<String, Vec<f32>> {
    fn load(&mut self, id: &str) -> Result<Vec<f32>, BoxError> {
        self.get(id)
            .cloned()
            .ok_or_else(|| format!("no clip named '{id}'").into())
    }
}
