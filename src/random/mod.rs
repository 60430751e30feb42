//! Seed-deterministic selection from fixed lists.
//!
//! This module contains the draw policies and the randomizer that applies
//! them. Noise corpora use it to pick clip identifiers, but nothing here is
//! specific to audio.

mod list;
mod policy;

pub use list::{ListRandomizer, ListRandomizerConfig};
pub use policy::DrawPolicy;
