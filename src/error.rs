//! Error types.
//!
//! Rule violations are ordinary values: a rejected move leaves the board
//! untouched and the caller decides what to do next. "No legal move" is not
//! an error at all and is reported as `None` by the search.

use std::path::PathBuf;

/// Why a pit index cannot be sown by the acting player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PitRejection {
    /// Index is outside `0..total_pits`.
    #[error("out of range")]
    OutOfRange,
    /// Pit belongs to the other player.
    #[error("not owned by the mover")]
    NotOwned,
    /// Pit holds no stones.
    #[error("empty")]
    Empty,
}

/// A move that was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("pit {pit} is {reason}")]
    InvalidPit { pit: usize, reason: PitRejection },

    #[error("sowing pit {pit} would capture every opponent stone while another move exists")]
    IllegalMove { pit: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Invalid board configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("a board needs at least one pit per side")]
    NoPits,

    #[error("pits must start with at least one stone")]
    NoStones,
}

/// Raw board import/export failures.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("expected {expected} pit counts, got {actual}")]
    PitCountMismatch { expected: usize, actual: usize },

    #[error("unknown player id {0}")]
    UnknownPlayer(u8),

    #[error("invalid board configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] bincode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Session history persistence failures.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to access session file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse session file {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Unrecognised difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty {0:?} (expected Easy, Medium or Hard)")]
pub struct ParseDifficultyError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        let err = MoveError::InvalidPit {
            pit: 7,
            reason: PitRejection::NotOwned,
        };
        assert_eq!(err.to_string(), "pit 7 is not owned by the mover");
        assert_eq!(PitRejection::OutOfRange.to_string(), "out of range");
        assert_eq!(PitRejection::Empty.to_string(), "empty");
    }
}
