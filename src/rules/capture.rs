//! Capture chain resolution.
//!
//! After a sow, if the last stone landed on the opponent's side and left
//! that pit holding exactly 2 or 3 stones, the pit is captured. The check
//! then steps one pit backwards and repeats, stopping at the first pit that
//! is either the mover's own or holds any other count. A gap ends the
//! chain even if a capturable pit lies further back.

use crate::core::{Board, PlayerId};

/// Counts that make an opponent pit capturable.
const CAPTURABLE: [u32; 2] = [2, 3];

/// True if `count` is a capturable pit size.
#[must_use]
pub fn is_capturable(count: u32) -> bool {
    CAPTURABLE.contains(&count)
}

/// Walk the capture chain backwards from `landing` and empty every
/// captured pit.
///
/// Returns the number of stones removed. Scores are not touched; the
/// caller credits the mover.
pub fn resolve_captures(board: &mut Board, landing: usize, mover: PlayerId) -> u32 {
    let opponent = mover.opponent();
    let total = board.total_pits();
    let mut captured = 0;
    let mut idx = landing;

    while board.owner_of(idx) == opponent && is_capturable(board.stones(idx)) {
        captured += board.take_pit(idx);
        idx = (idx + total - 1) % total;
    }

    captured
}
