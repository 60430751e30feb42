//! Ordered chains of sound effects.

use std::fmt;

use super::SoundEffect;
use crate::error::Result;

/// Applies a sequence of effects in order.
///
/// The first failing effect stops the chain and its error is returned.
/// Effects earlier in the chain keep their changes.
#[derive(Default)]
pub struct SoundEffectChain {
    effects: Vec<Box<dyn SoundEffect + Send>>,
}

impl SoundEffectChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an effect to the end of the chain.
    pub fn push(&mut self, effect: Box<dyn SoundEffect + Send>) {
        self.effects.push(effect);
    }

    /// Builder: append an effect.
    #[must_use]
    pub fn with(mut self, effect: impl SoundEffect + Send + 'static) -> Self {
        self.effects.push(Box::new(effect));
        self
    }

    /// Number of effects in the chain.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Returns `true` if the chain holds no effects.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

impl SoundEffect for SoundEffectChain {
    fn name(&self) -> &str {
        "chain"
    }

    fn apply(&mut self, signal: &mut Vec<f32>) -> Result<()> {
        for effect in &mut self.effects {
            if let Err(err) = effect.apply(signal) {
                log::debug!("sound effect {} failed: {}", effect.name(), err);
                return Err(err);
            }
        }
        Ok(())
    }
}

impl fmt::Display for SoundEffectChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.effects.iter().map(|e| e.name()).collect();
        write!(f, "SoundEffectChain[{}]", names.join(", "))
    }
}
