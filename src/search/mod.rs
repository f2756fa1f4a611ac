//! Move selection for the computer opponent.
//!
//! ## Overview
//!
//! Three tiers trade strength for speed:
//!
//! - **Easy**: random legal move
//! - **Medium**: greedy immediate capture, with some random moves mixed in
//! - **Hard**: minimax with alpha-beta pruning (4 plies by default)
//!
//! All exploration happens on owned clones of the board. A tier that finds
//! no legal move returns `None`; the controller passes that player.
//!
//! ## Usage
//!
//! ```rust
//! use oware::core::{Board, PlayerId};
//! use oware::search::{CpuPlayer, Difficulty, SearchConfig};
//!
//! let board = Board::default();
//! let mut cpu = CpuPlayer::new(PlayerId::TOP, Difficulty::Hard, SearchConfig::default());
//!
//! if let Some(pit) = cpu.get_move(&board) {
//!     println!("CPU sows pit {pit}");
//! }
//! ```

pub mod config;
pub mod difficulty;
pub mod minimax;
pub mod player;
pub mod stats;

pub use config::SearchConfig;
pub use difficulty::Difficulty;
pub use minimax::{alpha_beta, evaluate, is_decided, minimax, SearchOutcome};
pub use player::{get_move, get_move_with, greedy_move, CpuPlayer};
pub use stats::SearchStats;
