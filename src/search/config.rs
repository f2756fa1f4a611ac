//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Computer opponent tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies searched by the Hard tier.
    pub hard_depth: u32,

    /// Probability that the Medium tier plays a random legal move instead
    /// of the greedy one. Clamped to `0.0..=1.0` when drawn; NaN never
    /// picks randomly.
    pub medium_random_rate: f64,

    /// Seed for the player's random source.
    /// Same seed produces the same sequence of choices.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            hard_depth: 4,
            medium_random_rate: 0.3,
            seed: 42,
        }
    }
}

impl SearchConfig {
    /// Set the Hard tier search depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.hard_depth = depth;
        self
    }

    /// Set the Medium tier random-move probability.
    #[must_use]
    pub fn with_random_rate(mut self, rate: f64) -> Self {
        self.medium_random_rate = rate;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.hard_depth, 4);
        assert_eq!(config.medium_random_rate, 0.3);
    }

    #[test]
    fn test_builder_and_serde() {
        let config = SearchConfig::default()
            .with_depth(6)
            .with_random_rate(0.0)
            .with_seed(7);

        let json = serde_json::to_string(&config).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
        assert_eq!(back.hard_depth, 6);
    }
}
