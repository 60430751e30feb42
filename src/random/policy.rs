//! Selection disciplines for drawing from a fixed list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SfxError;

/// How a [`ListRandomizer`](super::ListRandomizer) picks the next item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawPolicy {
    /// Every draw is uniform over the whole list, independent of history.
    #[default]
    WithReplacement,
    /// Draws follow a random permutation of the list; a new permutation is
    /// drawn once the current one is exhausted. Every item appears exactly
    /// once per cycle.
    WithoutReplacement,
    /// Draws walk the list in order and wrap around. Consumes no randomness.
    Sequential,
}

impl DrawPolicy {
    /// Returns the canonical snake_case name of the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawPolicy::WithReplacement => "with_replacement",
            DrawPolicy::WithoutReplacement => "without_replacement",
            DrawPolicy::Sequential => "sequential",
        }
    }
}

impl fmt::Display for DrawPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrawPolicy {
    type Err = SfxError;

    /// Parses a policy name case-insensitively, accepting `-` in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "with_replacement" => Ok(DrawPolicy::WithReplacement),
            "without_replacement" => Ok(DrawPolicy::WithoutReplacement),
            "sequential" => Ok(DrawPolicy::Sequential),
            _ => Err(SfxError::UnknownPolicy(s.to_string())),
        }
    }
}
