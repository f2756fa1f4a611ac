//! Oware rules: capture chains, legal moves, move application.
//!
//! Everything here is a pure function over a [`Board`](crate::core::Board).
//! Legality checks run on scratch copies; only a committed
//! [`apply_move`] changes the board it is given.

pub mod capture;
pub mod moves;
pub mod result;

pub use capture::{is_capturable, resolve_captures};
pub use moves::{apply_move, has_legal_moves, legal_moves, simulate_move, ApplyMode, MoveOutcome};
pub use result::GameResult;
