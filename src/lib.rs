//! # oware
//!
//! Rules engine and computer opponent for Oware, the two-player
//! sowing-and-capture board game.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: Legality and capture are functions of a `Board`.
//!    Every check runs on a scratch copy; the live board changes only when
//!    a move is committed.
//!
//! 2. **Value-type boards**: A board is a small owned aggregate. Search
//!    clones it freely and never holds a reference to the live game.
//!
//! 3. **Injected randomness**: Random tiers draw from a caller-owned
//!    `GameRng`, so a fixed seed replays every decision.
//!
//! ## Modules
//!
//! - `core`: Players, board configuration, board state, RNG, snapshots
//! - `rules`: Capture chains, legal moves (Grand Slam rule), move application
//! - `search`: Easy / Medium / Hard move selection, alpha-beta minimax
//! - `game`: Turn controller, end-of-game sweep, CPU-vs-CPU matches
//! - `session`: Match history and statistics persisted as JSON
//!
//! ## Example
//!
//! ```
//! use oware::{GameController, CpuPlayer, Difficulty, PlayerId, SearchConfig};
//!
//! let mut game = GameController::default();
//! game.play(2).unwrap();
//!
//! let mut cpu = CpuPlayer::new(PlayerId::TOP, Difficulty::Medium, SearchConfig::default());
//! match cpu.get_move(game.board()) {
//!     Some(pit) => { game.play(pit).unwrap(); }
//!     None => game.pass_turn(),
//! }
//! assert_eq!(game.current_player(), PlayerId::BOTTOM);
//! ```

pub mod core;
pub mod error;
pub mod game;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardConfig, GameRng, GameSnapshot, PlayerId, PlayerPair,
};

pub use crate::error::{ConfigError, MoveError, ParseDifficultyError, PitRejection, SessionError, SnapshotError};

pub use crate::rules::{apply_move, legal_moves, simulate_move, ApplyMode, GameResult, MoveOutcome};

pub use crate::search::{get_move, CpuPlayer, Difficulty, SearchConfig, SearchStats};

pub use crate::game::{play_match, GameController, GameStatus, MoveRecord};

pub use crate::session::{MatchRecord, MatchWinner, SessionLog};

/// Create a board with every pit holding `initial_stones`.
///
/// Fails if either count is zero.
pub fn create_board(pits_per_side: usize, initial_stones: u32) -> Result<Board, ConfigError> {
    Board::from_config(BoardConfig::new(pits_per_side, initial_stones))
}
