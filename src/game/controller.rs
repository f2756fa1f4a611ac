//! Game controller: two states, one transition per move.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{Board, BoardConfig, GameSnapshot, PlayerId};
use crate::error::{ConfigError, MoveError, SnapshotError};
use crate::rules::{apply_move, legal_moves, ApplyMode, GameResult, MoveOutcome};

/// Whether the game is still being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being accepted.
    InProgress,
    /// Board swept; the final result.
    Ended(GameResult),
}

/// One committed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who moved.
    pub player: PlayerId,
    /// Pit that was sown.
    pub pit: usize,
    /// Stones captured by the move.
    pub captured: u32,
}

/// Owns the live board and whose turn it is.
///
/// After every move or pass the controller checks for the end of the game:
/// if either side is empty, or the player to move has no legal move, every
/// remaining stone goes to the owner of its pit and the game ends.
#[derive(Clone, Debug)]
pub struct GameController {
    board: Board,
    current: PlayerId,
    status: GameStatus,
    history: Vec<MoveRecord>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::from_board(Board::default(), PlayerId::BOTTOM)
    }
}

impl GameController {
    /// Start a new game; player 0 moves first.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_board(Board::from_config(config)?, PlayerId::BOTTOM))
    }

    /// Take over an existing position.
    ///
    /// The position is checked immediately, so a board with an empty side
    /// comes back already ended.
    pub fn from_board(board: Board, current: PlayerId) -> Self {
        let mut controller = Self {
            board,
            current,
            status: GameStatus::InProgress,
            history: Vec::new(),
        };
        controller.check_end();
        controller
    }

    /// Resume from a raw snapshot.
    pub fn from_snapshot(config: BoardConfig, snapshot: &GameSnapshot) -> Result<Self, SnapshotError> {
        let (board, current) = Board::import(config, snapshot)?;
        Ok(Self::from_board(board, current))
    }

    /// Export the board and player to move.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.board.export(self.current)
    }

    /// The live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Ended(_))
    }

    /// Final result, once the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.status {
            GameStatus::Ended(result) => Some(result),
            GameStatus::InProgress => None,
        }
    }

    /// Moves played so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Legal pits for the player to move. Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        legal_moves(&self.board, self.current)
    }

    /// Play `pit` for the player to move and hand the turn over.
    ///
    /// A rejected move leaves the board and turn unchanged.
    pub fn play(&mut self, pit: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let outcome = apply_move(&mut self.board, self.current, pit, ApplyMode::Commit)?;
        self.history.push(MoveRecord {
            player: self.current,
            pit,
            captured: outcome.captured,
        });

        self.current = self.current.opponent();
        self.check_end();
        Ok(outcome)
    }

    /// Skip the player to move. Used when a search returns no move.
    pub fn pass_turn(&mut self) {
        if self.is_over() {
            return;
        }
        warn!(player = %self.current, "passing turn without a move");
        self.current = self.current.opponent();
        self.check_end();
    }

    /// End the game now, sweeping every remaining stone to its owner.
    ///
    /// Returns the final result. Does nothing but report it if the game
    /// is already over.
    pub fn finish(&mut self) -> GameResult {
        if let GameStatus::Ended(result) = self.status {
            return result;
        }
        self.sweep()
    }

    fn check_end(&mut self) {
        if self.is_over() {
            return;
        }

        let empty_side = PlayerId::all().any(|p| self.board.is_empty_side(p));
        if empty_side || legal_moves(&self.board, self.current).is_empty() {
            self.sweep();
        }
    }

    fn sweep(&mut self) -> GameResult {
        for player in PlayerId::all() {
            let swept = self.board.sweep_side(player);
            if swept > 0 {
                debug!(%player, swept, "remaining stones swept");
            }
        }

        let result = GameResult::from_scores(self.board.scores());
        self.status = GameStatus::Ended(result);
        info!(
            scores = ?self.board.scores().into_array(),
            ?result,
            moves = self.history.len(),
            "game over"
        );
        result
    }
}
