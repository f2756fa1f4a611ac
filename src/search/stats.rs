//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one alpha-beta search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, root included.
    pub nodes: u32,

    /// Positions scored without expanding (depth limit, no moves, decided).
    pub leaves: u32,

    /// Times the remaining siblings of a node were skipped.
    pub cutoffs: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
