//! Depth-limited minimax with alpha-beta pruning.
//!
//! The searching player maximizes, the opponent minimizes. Leaves are
//! scored purely on material: searching player's score minus the
//! opponent's. A position is a leaf when the depth runs out, the player to
//! act has no legal move, or either score is past half the stones in play.
//!
//! Each child is an owned clone with the move committed, so captures and
//! scores carry down the line. Alpha and beta are passed by value; nothing
//! is shared between calls.

use std::time::Instant;

use tracing::trace;

use crate::core::{Board, PlayerId};
use crate::rules::{apply_move, legal_moves, ApplyMode};

use super::stats::SearchStats;

/// Result of a root search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Minimax value from the searching player's perspective.
    pub value: i32,
    /// First pit reaching `value`, or `None` if the root was a leaf.
    pub best_move: Option<usize>,
    /// Search diagnostics.
    pub stats: SearchStats,
}

/// Material balance from `ai`'s point of view.
#[must_use]
pub fn evaluate(board: &Board, ai: PlayerId) -> i32 {
    board.score(ai) as i32 - board.score(ai.opponent()) as i32
}

/// True once either score exceeds half of the stones in play.
#[must_use]
pub fn is_decided(board: &Board) -> bool {
    let threshold = board.winning_threshold();
    PlayerId::all().any(|p| board.score(p) > threshold)
}

/// Search `depth` plies for `ai`, who is to move on `board`.
#[must_use]
pub fn minimax(board: &Board, ai: PlayerId, depth: u32) -> SearchOutcome {
    let start = Instant::now();
    let mut stats = SearchStats::new();

    let (value, best_move) = alpha_beta(board, ai, depth, i32::MIN, i32::MAX, true, &mut stats);

    stats.time_us = start.elapsed().as_micros() as u64;
    SearchOutcome {
        value,
        best_move,
        stats,
    }
}

/// One node of the search.
///
/// Returns the node's value and the move that produced it. Ties keep the
/// earliest move in legal-move order.
pub fn alpha_beta(
    board: &Board,
    ai: PlayerId,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    stats: &mut SearchStats,
) -> (i32, Option<usize>) {
    stats.nodes += 1;

    let to_move = if maximizing { ai } else { ai.opponent() };
    let legal = legal_moves(board, to_move);

    if depth == 0 || legal.is_empty() || is_decided(board) {
        stats.leaves += 1;
        return (evaluate(board, ai), None);
    }

    let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = None;

    for (i, &pit) in legal.iter().enumerate() {
        let mut child = board.clone();
        if apply_move(&mut child, to_move, pit, ApplyMode::Commit).is_err() {
            continue;
        }

        let (value, _) = alpha_beta(&child, ai, depth - 1, alpha, beta, !maximizing, stats);

        if maximizing {
            if value > best_value {
                best_value = value;
                best_move = Some(pit);
            }
            alpha = alpha.max(value);
        } else {
            if value < best_value {
                best_value = value;
                best_move = Some(pit);
            }
            beta = beta.min(value);
        }

        if beta <= alpha {
            if i + 1 < legal.len() {
                stats.cutoffs += 1;
                trace!(depth, pit, alpha, beta, "alpha-beta cutoff");
            }
            break;
        }
    }

    (best_value, best_move)
}
