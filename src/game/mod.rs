//! Turn bookkeeping and end-of-game handling.
//!
//! [`GameController`] owns the live board, alternates players, and sweeps
//! the remaining stones once a side runs dry. [`play_match`] drives a full
//! game between two computer players.

mod controller;
mod play;

pub use controller::{GameController, GameStatus, MoveRecord};
pub use play::play_match;
