//! Difficulty tiers for the computer opponent.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseDifficultyError;

/// How hard the computer opponent plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniform random legal move.
    Easy,
    /// Mostly the largest immediate capture, sometimes random.
    #[default]
    Medium,
    /// Depth-limited minimax with alpha-beta pruning.
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}
