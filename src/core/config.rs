//! Board configuration.
//!
//! A board is fully described by two numbers: how many pits each player
//! owns and how many stones each pit holds at the start. The standard game
//! is 6 pits per side with 4 stones each (48 stones in play).

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Standard pits per side.
pub const DEFAULT_PITS_PER_SIDE: usize = 6;

/// Standard starting stones per pit.
pub const DEFAULT_INITIAL_STONES: u32 = 4;

/// Board dimensions and starting stone count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Pits owned by each player.
    pub pits_per_side: usize,

    /// Stones placed in every pit at the start.
    pub initial_stones: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            pits_per_side: DEFAULT_PITS_PER_SIDE,
            initial_stones: DEFAULT_INITIAL_STONES,
        }
    }
}

impl BoardConfig {
    /// Create a configuration.
    #[must_use]
    pub const fn new(pits_per_side: usize, initial_stones: u32) -> Self {
        Self {
            pits_per_side,
            initial_stones,
        }
    }

    /// Set pits per side.
    #[must_use]
    pub fn with_pits_per_side(mut self, pits: usize) -> Self {
        self.pits_per_side = pits;
        self
    }

    /// Set initial stones per pit.
    #[must_use]
    pub fn with_initial_stones(mut self, stones: u32) -> Self {
        self.initial_stones = stones;
        self
    }

    /// Total pits on the board (always even).
    #[must_use]
    pub const fn total_pits(&self) -> usize {
        self.pits_per_side * 2
    }

    /// Stones in play for the whole game.
    #[must_use]
    pub const fn total_stones(&self) -> u32 {
        self.total_pits() as u32 * self.initial_stones
    }

    /// Check the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pits_per_side == 0 {
            return Err(ConfigError::NoPits);
        }
        if self.initial_stones == 0 {
            return Err(ConfigError::NoStones);
        }
        Ok(())
    }
}
