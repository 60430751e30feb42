//! Noisemix - additive noise augmentation for audio training pipelines
//!
//! This library mixes randomly selected noise clips into audio buffers at a
//! random signal-to-noise ratio, reproducibly from a seed.

pub mod corpus;
pub mod effects;
pub mod error;
pub mod level;
pub mod loader;
pub mod random;

// Re-export commonly used types at the crate root
pub use effects::{AdditiveNoise, AdditiveNoiseConfig, MixOutcome, SoundEffect, SoundEffectChain};
pub use error::{BoxError, Result, SfxError};
pub use loader::ClipLoader;
#[cfg(feature = "wav-loader")]
pub use loader::WavClipLoader;
pub use random::{DrawPolicy, ListRandomizer, ListRandomizerConfig};
