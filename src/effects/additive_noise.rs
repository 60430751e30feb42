//! Additive background noise at a random signal-to-noise ratio.
//!
//! # Draw order
//!
//! Every call to [`AdditiveNoise::apply`] consumes the effect's random
//! stream in this order:
//!
//! 1. gate, uniform in [0, 1)
//! 2. SNR in dB, uniform in `[min_snr_db, max_snr_db]`
//! 3. clip count, uniform in `[min_clips, max_clips]`
//! 4. window start, uniform in `[0, len)`
//! 5. per clip: one corpus draw (separate stream), then a shift uniform in
//!    `[0, clip_len)`
//!
//! A closed gate stops after step 1. Changing this order changes the output
//! of every seeded configuration.
//!
//! # Wraparound
//!
//! The noise window covers absolute positions `[start, start + span)` with
//! `span = floor(mix_ratio * len)`. Positions wrap modulo the signal length
//! and each clip is read modulo its own length, so a burst can straddle the
//! end of the buffer and short clips tile across the window.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{AdditiveNoiseConfig, SoundEffect};
use crate::corpus;
use crate::error::{Result, SfxError};
use crate::level::{root_mean_square, snr_gain};
use crate::loader::ClipLoader;
use crate::random::{ListRandomizer, ListRandomizerConfig};

#[cfg(feature = "wav-loader")]
use crate::loader::WavClipLoader;

/// What a call to [`AdditiveNoise::apply`] did to the signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MixOutcome {
    /// The probability gate was closed; nothing else was drawn.
    Skipped,
    /// The mixed noise had zero RMS, so the signal was left untouched.
    Silent {
        /// RMS of the accumulated noise.
        noise_rms: f32,
    },
    /// Noise was added to the signal.
    Mixed {
        /// SNR drawn for this call, in dB.
        snr_db: f32,
        /// Number of clips superimposed.
        clips: usize,
        /// Factor applied to the accumulated noise.
        gain: f32,
    },
}

impl MixOutcome {
    /// Returns `true` if the signal was modified.
    pub fn is_mixed(&self) -> bool {
        matches!(self, MixOutcome::Mixed { .. })
    }
}

/// Mixes randomly selected noise clips into a signal at a random SNR.
///
/// The effect owns its configuration, a [`ListRandomizer`] over the corpus
/// identifiers, a clip loader and a seeded random stream. Reusing one
/// instance across calls continues the same stream; two instances built from
/// equal configurations and driven with equal inputs produce identical
/// output.
///
/// `apply` mutates internal state, so one instance must not be shared
/// between workers. Give each worker its own instance with its own seed.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use noisemix::{AdditiveNoise, AdditiveNoiseConfig, MixOutcome};
///
/// let config = AdditiveNoiseConfig::default()
///     .with_snr_range(10.0, 10.0)
///     .with_clip_range(1, 1)
///     .with_random_seed(3);
/// let corpus = HashMap::from([("hum".to_string(), vec![0.2, -0.2, 0.1])]);
/// let mut effect = AdditiveNoise::from_corpus(config, vec!["hum".to_string()], corpus).unwrap();
///
/// let mut signal = vec![0.5f32; 1600];
/// let outcome = effect.apply(&mut signal).unwrap();
/// assert!(outcome.is_mixed());
/// ```
pub struct AdditiveNoise<L> {
    config: AdditiveNoiseConfig,
    noise_list: ListRandomizer<String>,
    loader: L,
    rng: ChaCha8Rng,
}

#[cfg(feature = "wav-loader")]
impl AdditiveNoise<WavClipLoader> {
    /// Creates the effect with a corpus of WAV file paths read from
    /// `config.corpus_list_path`.
    ///
    /// # Errors
    ///
    /// See [`AdditiveNoise::with_loader`].
    pub fn new(config: AdditiveNoiseConfig) -> Result<Self> {
        Self::with_loader(config, WavClipLoader::new())
    }
}

impl<L: ClipLoader> AdditiveNoise<L> {
    /// Creates the effect, reading corpus identifiers from
    /// `config.corpus_list_path` and decoding them with `loader`.
    ///
    /// # Errors
    ///
    /// - [`SfxError::InvalidConfig`] if a configured range is invalid
    /// - [`SfxError::CorpusOpen`], [`SfxError::CorpusRead`] or
    ///   [`SfxError::EmptyCorpus`] if the list file is unusable
    pub fn with_loader(config: AdditiveNoiseConfig, loader: L) -> Result<Self> {
        config.validate()?;
        let ids = corpus::read_list(&config.corpus_list_path)?;
        Self::from_corpus(config, ids, loader)
    }

    /// Creates the effect over an already collected corpus. The configured
    /// list path is ignored.
    ///
    /// # Errors
    ///
    /// - [`SfxError::InvalidConfig`] if a configured range is invalid
    /// - [`SfxError::EmptyList`] if `ids` is empty
    pub fn from_corpus(config: AdditiveNoiseConfig, ids: Vec<String>, loader: L) -> Result<Self> {
        config.validate()?;
        let noise_list = ListRandomizer::new(
            ListRandomizerConfig {
                policy: config.draw_policy,
                random_seed: config.random_seed,
            },
            ids,
        )?;
        let rng = ChaCha8Rng::seed_from_u64(config.random_seed);

        log::debug!(
            "created additive noise with {} over {} clips",
            config,
            noise_list.len()
        );

        Ok(Self {
            config,
            noise_list,
            loader,
            rng,
        })
    }

    /// The effect's configuration.
    pub fn config(&self) -> &AdditiveNoiseConfig {
        &self.config
    }

    /// The corpus randomizer.
    pub fn noise_list(&self) -> &ListRandomizer<String> {
        &self.noise_list
    }

    /// Possibly mixes noise into `signal` in place.
    ///
    /// The signal is only written after every clip has loaded, so an error
    /// leaves it exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`SfxError::EmptySignal`] if the gate opens on an empty signal
    /// - [`SfxError::NoiseLoad`] if a clip fails to decode
    /// - [`SfxError::EmptyClip`] if a clip has no samples
    pub fn apply(&mut self, signal: &mut [f32]) -> Result<MixOutcome> {
        if self.rng.gen_range(0.0f32..1.0) >= self.config.apply_probability {
            return Ok(MixOutcome::Skipped);
        }
        if signal.is_empty() {
            return Err(SfxError::EmptySignal);
        }

        let config = &self.config;
        let signal_rms = root_mean_square(signal);
        let snr_db = self.rng.gen_range(config.min_snr_db..=config.max_snr_db);
        let clips = self.rng.gen_range(config.min_clips..=config.max_clips);
        let start = self.rng.gen_range(0..signal.len());
        // mix_ratio is within (0, 1], so the window never exceeds the signal.
        let span = (f64::from(config.mix_ratio) * signal.len() as f64) as usize;

        let mut mixed_noise = vec![0.0f32; signal.len()];
        for _ in 0..clips {
            let id = self.noise_list.draw();
            let clip = self
                .loader
                .load(id)
                .map_err(|source| SfxError::NoiseLoad {
                    id: id.clone(),
                    source,
                })?;
            if clip.is_empty() {
                return Err(SfxError::EmptyClip { id: id.clone() });
            }
            let shift = self.rng.gen_range(0..clip.len());
            accumulate_wrapped(&mut mixed_noise, &clip, start, span, shift);
        }

        let noise_rms = root_mean_square(&mixed_noise);
        if noise_rms <= 0.0 {
            log::warn!("additive noise skipped, invalid noise_rms={noise_rms}");
            return Ok(MixOutcome::Silent { noise_rms });
        }

        let gain = snr_gain(signal_rms, noise_rms, snr_db);
        for (sample, noise) in signal.iter_mut().zip(&mixed_noise) {
            *sample += noise * gain;
        }
        log::trace!("mixed {clips} noise clips at snr={snr_db}dB gain={gain}");

        Ok(MixOutcome::Mixed {
            snr_db,
            clips,
            gain,
        })
    }
}

/// Adds `clip` into `mixed` over absolute positions `[start, start + span)`.
///
/// Position `j` writes `mixed[j % mixed.len()]` from
/// `clip[(shift + j) % clip.len()]`. Both slices must be non-empty.
pub(crate) fn accumulate_wrapped(
    mixed: &mut [f32],
    clip: &[f32],
    start: usize,
    span: usize,
    shift: usize,
) {
    let (len, clip_len) = (mixed.len(), clip.len());
    for j in start..start + span {
        mixed[j % len] += clip[(shift + j) % clip_len];
    }
}

impl<L: ClipLoader> SoundEffect for AdditiveNoise<L> {
    fn name(&self) -> &str {
        "additive_noise"
    }

    fn apply(&mut self, signal: &mut Vec<f32>) -> Result<()> {
        AdditiveNoise::apply(self, signal.as_mut_slice()).map(|_| ())
    }
}

impl<L> fmt::Display for AdditiveNoise<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AdditiveNoise{{config={} noise_list={}}}",
            self.config, self.noise_list
        )
    }
}
