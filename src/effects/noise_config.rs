//! Configuration for the additive noise effect.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SfxError};
use crate::random::DrawPolicy;

/// Settings for [`AdditiveNoise`](super::AdditiveNoise).
///
/// Deserializes from the snake_case field names below; missing fields take
/// their default values, unknown fields are rejected.
///
/// # Examples
///
/// ```
/// use noisemix::{AdditiveNoiseConfig, DrawPolicy};
///
/// let config = AdditiveNoiseConfig::from_json_str(
///     r#"{ "corpus_list_path": "noise.lst", "min_snr_db": 5, "max_snr_db": 15,
///          "draw_policy": "without_replacement", "random_seed": 7 }"#,
/// )
/// .unwrap();
/// assert_eq!(config.draw_policy, DrawPolicy::WithoutReplacement);
/// assert_eq!(config.max_clips, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdditiveNoiseConfig {
    /// Probability in [0, 1] that a call to `apply` mixes anything in.
    pub apply_probability: f32,
    /// Fraction of the signal length covered by one noise window, within
    /// (0, 1].
    pub mix_ratio: f32,
    /// Lowest SNR in dB, inclusive.
    pub min_snr_db: f32,
    /// Highest SNR in dB, inclusive.
    pub max_snr_db: f32,
    /// Fewest clips superimposed per call, inclusive.
    pub min_clips: usize,
    /// Most clips superimposed per call, inclusive.
    pub max_clips: usize,
    /// Newline-delimited list of noise clip identifiers.
    pub corpus_list_path: PathBuf,
    /// How clip identifiers are drawn from the corpus.
    pub draw_policy: DrawPolicy,
    /// Seed for both the effect's stream and the corpus randomizer.
    pub random_seed: u64,
}

impl Default for AdditiveNoiseConfig {
    fn default() -> Self {
        Self {
            apply_probability: 1.0,
            mix_ratio: 1.0,
            min_snr_db: 0.0,
            max_snr_db: 30.0,
            min_clips: 1,
            max_clips: 3,
            corpus_list_path: PathBuf::new(),
            draw_policy: DrawPolicy::WithReplacement,
            random_seed: 0,
        }
    }
}

impl AdditiveNoiseConfig {
    /// Creates a default configuration reading its corpus from `path`.
    pub fn new(corpus_list_path: impl Into<PathBuf>) -> Self {
        Self {
            corpus_list_path: corpus_list_path.into(),
            ..Self::default()
        }
    }

    /// Parses a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SfxError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Builder: set the probability of applying the effect.
    #[must_use]
    pub fn with_apply_probability(mut self, probability: f32) -> Self {
        self.apply_probability = probability;
        self
    }

    /// Builder: set the noise window length as a fraction of the signal.
    #[must_use]
    pub fn with_mix_ratio(mut self, ratio: f32) -> Self {
        self.mix_ratio = ratio;
        self
    }

    /// Builder: set the inclusive SNR range in dB.
    #[must_use]
    pub fn with_snr_range(mut self, min_db: f32, max_db: f32) -> Self {
        self.min_snr_db = min_db;
        self.max_snr_db = max_db;
        self
    }

    /// Builder: set the inclusive range of clips per call.
    #[must_use]
    pub fn with_clip_range(mut self, min: usize, max: usize) -> Self {
        self.min_clips = min;
        self.max_clips = max;
        self
    }

    /// Builder: set the corpus list path.
    #[must_use]
    pub fn with_corpus_list_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.corpus_list_path = path.into();
        self
    }

    /// Builder: set the corpus draw policy.
    #[must_use]
    pub fn with_draw_policy(mut self, policy: DrawPolicy) -> Self {
        self.draw_policy = policy;
        self
    }

    /// Builder: set the random seed.
    #[must_use]
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = seed;
        self
    }

    /// Checks every range.
    ///
    /// # Errors
    ///
    /// Returns [`SfxError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.apply_probability) {
            return Err(invalid(format!(
                "apply_probability={} must be within [0, 1]",
                self.apply_probability
            )));
        }
        if !(self.mix_ratio > 0.0 && self.mix_ratio <= 1.0) {
            return Err(invalid(format!(
                "mix_ratio={} must be within (0, 1]",
                self.mix_ratio
            )));
        }
        if !self.min_snr_db.is_finite() || !self.max_snr_db.is_finite() {
            return Err(invalid(format!(
                "snr range [{}, {}] must be finite",
                self.min_snr_db, self.max_snr_db
            )));
        }
        if !(self.max_snr_db - self.min_snr_db).is_finite() {
            return Err(invalid(format!(
                "snr range [{}, {}] is too wide",
                self.min_snr_db, self.max_snr_db
            )));
        }
        if self.min_snr_db > self.max_snr_db {
            return Err(invalid(format!(
                "min_snr_db={} exceeds max_snr_db={}",
                self.min_snr_db, self.max_snr_db
            )));
        }
        if self.min_clips > self.max_clips {
            return Err(invalid(format!(
                "min_clips={} exceeds max_clips={}",
                self.min_clips, self.max_clips
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> SfxError {
    SfxError::InvalidConfig(message)
}

impl fmt::Display for AdditiveNoiseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AdditiveNoiseConfig{{apply_probability={} mix_ratio={} min_snr_db={} max_snr_db={} \
             min_clips={} max_clips={} corpus_list_path={} draw_policy={} random_seed={}}}",
            self.apply_probability,
            self.mix_ratio,
            self.min_snr_db,
            self.max_snr_db,
            self.min_clips,
            self.max_clips,
            self.corpus_list_path.display(),
            self.draw_policy,
            self.random_seed
        )
    }
}
