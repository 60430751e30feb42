//! Sound effects for data augmentation.
//!
//! Effects modify a fully materialized mono buffer in place. They can be
//! used on their own or composed with [`SoundEffectChain`].

mod additive_noise;
mod chain;
mod noise_config;

pub use additive_noise::{AdditiveNoise, MixOutcome};
pub use chain::SoundEffectChain;
pub use noise_config::AdditiveNoiseConfig;

use crate::error::Result;

/// An augmentation stage applied to one buffer at a time.
pub trait SoundEffect {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Transforms `signal` in place. Effects may change its length.
    #[allow(clippy::ptr_arg)]
    fn apply(&mut self, signal: &mut Vec<f32>) -> Result<()>;
}
