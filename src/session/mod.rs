//! Match history and cumulative statistics.
//!
//! A [`SessionLog`] records the result of every finished game and can be
//! saved to, and restored from, a JSON file. An unfinished game may be
//! stored alongside the history as a [`GameSnapshot`](crate::core::GameSnapshot).

mod history;

pub use history::{CumulativeStats, MatchRecord, MatchWinner, SessionLog, StatsSummary, WinCounts};
