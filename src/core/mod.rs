//! Core types: players, board configuration, board state, RNG, snapshots.
//!
//! Nothing in this module knows the rules of Oware. The board is plain data
//! with ownership queries and raw sowing; `rules` builds on top of it.

pub mod board;
pub mod config;
pub mod player;
pub mod rng;
pub mod snapshot;

pub use board::Board;
pub use config::{BoardConfig, DEFAULT_INITIAL_STONES, DEFAULT_PITS_PER_SIDE};
pub use player::{PlayerId, PlayerPair};
pub use rng::GameRng;
pub use snapshot::GameSnapshot;
