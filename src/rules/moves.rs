//! Legal move enumeration and move application.
//!
//! ## Grand Slam rule
//!
//! A move that would leave the opponent with no stones is forbidden as
//! long as the mover has some other move that does not. When every move
//! starves the opponent the restriction is waived and all non-empty pits
//! are playable.
//!
//! Every check runs on a scratch clone. The live board changes only when
//! a move is committed, and never when it is rejected.

use tracing::debug;

use crate::core::{Board, PlayerId};
use crate::error::{MoveError, PitRejection};

use super::capture::resolve_captures;

/// Whether `apply_move` commits the move or only evaluates it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApplyMode {
    /// Sow, capture, and credit the score on the live board.
    #[default]
    Commit,
    /// Check legality and report the outcome without touching the board.
    SimulateOnly,
}

/// What a legal move does (or would do).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Pit that was sown.
    pub pit: usize,
    /// Pit that received the last stone.
    pub last_pit: usize,
    /// Stones captured and credited to the mover.
    pub captured: u32,
    /// Stones left on the opponent's side afterwards.
    pub opponent_remaining: u32,
}

impl MoveOutcome {
    /// True if the move leaves the opponent without stones.
    #[must_use]
    pub fn starves_opponent(&self) -> bool {
        self.opponent_remaining == 0
    }
}

/// Sow and capture on a scratch copy, crediting the capture to `player`.
fn play_on_copy(board: &Board, player: PlayerId, pit: usize) -> (Board, MoveOutcome) {
    let mut scratch = board.clone();
    let (last_pit, _) = scratch.sow_from(pit);
    let captured = resolve_captures(&mut scratch, last_pit, player);
    scratch.add_score(player, captured);

    let outcome = MoveOutcome {
        pit,
        last_pit,
        captured,
        opponent_remaining: scratch.total_for(player.opponent()),
    };
    (scratch, outcome)
}

fn validate_pit(board: &Board, player: PlayerId, pit: usize) -> Result<(), MoveError> {
    let reason = if pit >= board.total_pits() {
        PitRejection::OutOfRange
    } else if board.owner_of(pit) != player {
        PitRejection::NotOwned
    } else if board.stones(pit) == 0 {
        PitRejection::Empty
    } else {
        return Ok(());
    };
    Err(MoveError::InvalidPit { pit, reason })
}

/// Legal pits for `player`, in index order.
///
/// Empty only when the player has no stones at all.
#[must_use]
pub fn legal_moves(board: &Board, player: PlayerId) -> Vec<usize> {
    let candidates: Vec<usize> = board.non_empty_pits(player).collect();

    let feeding: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&pit| !play_on_copy(board, player, pit).1.starves_opponent())
        .collect();

    if feeding.is_empty() {
        candidates
    } else {
        feeding
    }
}

/// True if `player` can move at all.
#[must_use]
pub fn has_legal_moves(board: &Board, player: PlayerId) -> bool {
    !legal_moves(board, player).is_empty()
}

/// Evaluate a move without changing the board.
pub fn simulate_move(board: &Board, player: PlayerId, pit: usize) -> Result<MoveOutcome, MoveError> {
    check_move(board, player, pit).map(|(_, outcome)| outcome)
}

fn check_move(board: &Board, player: PlayerId, pit: usize) -> Result<(Board, MoveOutcome), MoveError> {
    validate_pit(board, player, pit)?;

    let (after, outcome) = play_on_copy(board, player, pit);

    if outcome.starves_opponent() {
        let alternative = board
            .non_empty_pits(player)
            .filter(|&alt| alt != pit)
            .find(|&alt| !play_on_copy(board, player, alt).1.starves_opponent());

        if let Some(alt) = alternative {
            debug!(pit, alternative = alt, %player, "grand slam vetoed");
            return Err(MoveError::IllegalMove { pit });
        }
    }

    Ok((after, outcome))
}

/// Play `pit` for `player`.
///
/// Fails without touching the board if the pit is out of range, not the
/// player's, empty, or vetoed by the Grand Slam rule. In
/// [`ApplyMode::SimulateOnly`] the outcome is reported but the board and
/// scores stay as they are.
pub fn apply_move(
    board: &mut Board,
    player: PlayerId,
    pit: usize,
    mode: ApplyMode,
) -> Result<MoveOutcome, MoveError> {
    let (after, outcome) = check_move(board, player, pit)?;

    if mode == ApplyMode::Commit {
        *board = after;
        debug!(
            pit,
            %player,
            last_pit = outcome.last_pit,
            captured = outcome.captured,
            "move committed"
        );
    }

    Ok(outcome)
}
