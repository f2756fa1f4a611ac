//! Board state: pit stone counts and per-player scores.
//!
//! The board knows nothing about the rules. It offers ownership queries,
//! per-side totals and raw sowing; capture and legality live in `rules`.
//!
//! ## Layout
//!
//! Pits are numbered `0..total_pits`. Player 0 owns `0..pits_per_side`,
//! player 1 owns the rest. Sowing moves towards higher indices and wraps
//! from the last pit back to pit 0.
//!
//! ## Conservation
//!
//! Stones only ever move between pits or from pits into a score, so
//! `sum(pits) + sum(scores)` never changes over the life of a board.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::BoardConfig;
use super::player::{PlayerId, PlayerPair};
use crate::error::{ConfigError, SnapshotError};

/// Inline capacity covers the standard 12-pit board without allocating.
pub(crate) type Pits = SmallVec<[u32; 12]>;

/// Oware board.
///
/// Cloning produces a fully independent copy (pits and scores).
///
/// Deserializing checks the configuration and the pit count just as
/// [`Board::import`] does.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    config: BoardConfig,
    pits: Pits,
    scores: PlayerPair<u32>,
}

#[derive(Deserialize)]
struct RawBoard {
    config: BoardConfig,
    pits: Pits,
    scores: PlayerPair<u32>,
}

impl TryFrom<RawBoard> for Board {
    type Error = SnapshotError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        raw.config.validate()?;
        if raw.pits.len() != raw.config.total_pits() {
            return Err(SnapshotError::PitCountMismatch {
                expected: raw.config.total_pits(),
                actual: raw.pits.len(),
            });
        }
        Ok(Self::from_parts(raw.config, raw.pits, raw.scores))
    }
}

impl Board {
    /// Board with every pit holding `initial_stones`. `pits_per_side` must
    /// be non-zero; public callers go through [`Board::from_config`].
    pub(crate) fn new(pits_per_side: usize, initial_stones: u32) -> Self {
        assert!(pits_per_side > 0, "Board needs at least 1 pit per side");
        let config = BoardConfig::new(pits_per_side, initial_stones);
        Self {
            config,
            pits: smallvec::smallvec![initial_stones; config.total_pits()],
            scores: PlayerPair::default(),
        }
    }

    /// Create a board from a validated configuration.
    pub fn from_config(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.pits_per_side, config.initial_stones))
    }

    /// Assemble a board from raw parts. Length is checked by the caller.
    pub(crate) fn from_parts(config: BoardConfig, pits: Pits, scores: PlayerPair<u32>) -> Self {
        debug_assert_eq!(pits.len(), config.total_pits());
        Self {
            config,
            pits,
            scores,
        }
    }

    /// The configuration this board was built from.
    #[must_use]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// Pits owned by each player.
    #[must_use]
    pub fn pits_per_side(&self) -> usize {
        self.config.pits_per_side
    }

    /// Total pits on the board.
    #[must_use]
    pub fn total_pits(&self) -> usize {
        self.pits.len()
    }

    /// Starting stones per pit.
    #[must_use]
    pub fn initial_stones(&self) -> u32 {
        self.config.initial_stones
    }

    /// All pit counts in index order.
    #[must_use]
    pub fn pits(&self) -> &[u32] {
        &self.pits
    }

    /// Stones in one pit. Panics if `index` is out of range.
    #[must_use]
    pub fn stones(&self, index: usize) -> u32 {
        self.pits[index]
    }

    /// Both scores.
    #[must_use]
    pub fn scores(&self) -> PlayerPair<u32> {
        self.scores
    }

    /// One player's score.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    /// Which player owns a pit.
    #[must_use]
    pub fn owner_of(&self, index: usize) -> PlayerId {
        if index < self.config.pits_per_side {
            PlayerId::BOTTOM
        } else {
            PlayerId::TOP
        }
    }

    /// Contiguous pit indices owned by a player.
    #[must_use]
    pub fn indices_for(&self, player: PlayerId) -> Range<usize> {
        let side = self.config.pits_per_side;
        if player == PlayerId::BOTTOM {
            0..side
        } else {
            side..self.total_pits()
        }
    }

    /// Stones remaining on a player's side.
    #[must_use]
    pub fn total_for(&self, player: PlayerId) -> u32 {
        self.pits[self.indices_for(player)].iter().sum()
    }

    /// True when a player's side holds no stones.
    #[must_use]
    pub fn is_empty_side(&self, player: PlayerId) -> bool {
        self.total_for(player) == 0
    }

    /// Non-empty pits owned by a player, in index order.
    pub fn non_empty_pits(&self, player: PlayerId) -> impl Iterator<Item = usize> + '_ {
        self.indices_for(player).filter(move |&i| self.pits[i] > 0)
    }

    /// Stones on the board plus stones scored. Constant for a given board.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        self.pits.iter().sum::<u32>() + self.scores.iter().map(|(_, s)| s).sum::<u32>()
    }

    /// A score above this value decides the game.
    #[must_use]
    pub fn winning_threshold(&self) -> u32 {
        self.config.total_stones() / 2
    }

    /// True if every pit still holds exactly `initial_stones`.
    #[must_use]
    pub fn is_initial_position(&self) -> bool {
        self.pits.iter().all(|&s| s == self.config.initial_stones)
    }

    /// Sow every stone from `index` one by one into the following pits.
    ///
    /// Wraps modulo `total_pits` and does not skip the source pit, so a
    /// sow of `total_pits` or more stones drops one back into it.
    /// Returns the last pit written and its resulting count; an empty pit
    /// returns `(index, 0)` and changes nothing.
    pub fn sow_from(&mut self, index: usize) -> (usize, u32) {
        let seeds = std::mem::take(&mut self.pits[index]);
        if seeds == 0 {
            return (index, 0);
        }

        let total = self.total_pits();
        let mut idx = index;
        for _ in 0..seeds {
            idx = (idx + 1) % total;
            self.pits[idx] += 1;
        }
        (idx, self.pits[idx])
    }

    /// Empty a pit and return what it held.
    pub(crate) fn take_pit(&mut self, index: usize) -> u32 {
        std::mem::take(&mut self.pits[index])
    }

    /// Credit stones to a player's score.
    pub(crate) fn add_score(&mut self, player: PlayerId, stones: u32) {
        self.scores[player] += stones;
    }

    /// Move every stone on a player's side into that player's score.
    ///
    /// Returns the number of stones moved.
    pub fn sweep_side(&mut self, player: PlayerId) -> u32 {
        let mut swept = 0;
        for i in self.indices_for(player) {
            swept += self.take_pit(i);
        }
        self.add_score(player, swept);
        swept
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(
            super::config::DEFAULT_PITS_PER_SIDE,
            super::config::DEFAULT_INITIAL_STONES,
        )
    }
}

impl std::fmt::Display for Board {
    /// Player 1's row is drawn right-to-left above player 0's row, so
    /// sowing runs counter-clockwise on screen.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row = |range: &mut dyn Iterator<Item = usize>| {
            range
                .map(|i| format!("[{:2}]", self.pits[i]))
                .collect::<Vec<_>>()
                .join(" ")
        };
        let top = row(&mut self.indices_for(PlayerId::TOP).rev());
        let bottom = row(&mut self.indices_for(PlayerId::BOTTOM));

        writeln!(f, "P1 score: {}", self.scores[PlayerId::TOP])?;
        writeln!(f, "{top}")?;
        writeln!(f, "{bottom}")?;
        write!(f, "P0 score: {}", self.scores[PlayerId::BOTTOM])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(pits: &[u32]) -> Board {
        let config = BoardConfig::new(pits.len() / 2, 4);
        Board::from_parts(config, pits.iter().copied().collect(), PlayerPair::default())
    }

    #[test]
    fn test_new_board_is_uniform() {
        let board = Board::new(6, 4);
        assert_eq!(board.total_pits(), 12);
        assert!(board.pits().iter().all(|&s| s == 4));
        assert_eq!(board.scores().into_array(), [0, 0]);
        assert_eq!(board.total_stones(), 48);
        assert!(board.is_initial_position());
    }

    #[test]
    fn test_from_config_validates() {
        assert!(Board::from_config(BoardConfig::new(0, 4)).is_err());
        let board = Board::from_config(BoardConfig::new(5, 3)).unwrap();
        assert_eq!(board.total_pits(), 10);
    }

    #[test]
    fn test_ownership() {
        let board = Board::default();
        assert_eq!(board.owner_of(0), PlayerId::BOTTOM);
        assert_eq!(board.owner_of(5), PlayerId::BOTTOM);
        assert_eq!(board.owner_of(6), PlayerId::TOP);
        assert_eq!(board.owner_of(11), PlayerId::TOP);
        assert_eq!(board.indices_for(PlayerId::BOTTOM), 0..6);
        assert_eq!(board.indices_for(PlayerId::TOP), 6..12);
    }

    #[test]
    fn test_side_totals() {
        let board = board_with(&[1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(board.total_for(PlayerId::BOTTOM), 3);
        assert!(board.is_empty_side(PlayerId::TOP));
        assert!(!board.is_empty_side(PlayerId::BOTTOM));
        assert_eq!(board.non_empty_pits(PlayerId::BOTTOM).collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_sow_simple() {
        let mut board = Board::default();
        let (last, count) = board.sow_from(2);
        assert_eq!((last, count), (6, 5));
        assert_eq!(board.pits(), &[4, 4, 0, 5, 5, 5, 5, 4, 4, 4, 4, 4]);
    }

    #[test]
    fn test_sow_wraps_around() {
        let mut board = board_with(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3]);
        let (last, count) = board.sow_from(11);
        assert_eq!((last, count), (2, 1));
        assert_eq!(board.pits(), &[1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_sow_full_lap_refills_source() {
        let mut board = board_with(&[0, 0, 0, 13, 0, 0, 0, 0, 0, 0, 0, 0]);
        let (last, count) = board.sow_from(3);
        // 12 pits: the 12th stone lands back in pit 3, the 13th in pit 4.
        assert_eq!((last, count), (4, 2));
        assert_eq!(board.stones(3), 1);
        assert_eq!(board.total_stones(), 13);
    }

    #[test]
    fn test_sow_empty_pit_is_noop() {
        let mut board = board_with(&[0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(board.sow_from(0), (0, 0));
        assert_eq!(board.stones(1), 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let board = Board::default();
        let mut copy = board.clone();
        copy.sow_from(0);
        copy.add_score(PlayerId::TOP, 2);

        assert!(board.is_initial_position());
        assert_eq!(board.score(PlayerId::TOP), 0);
        assert_ne!(board, copy);
    }

    #[test]
    fn test_sweep_side() {
        let mut board = board_with(&[0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 0, 3]);
        let before = board.total_stones();
        assert_eq!(board.sweep_side(PlayerId::TOP), 6);
        assert_eq!(board.score(PlayerId::TOP), 6);
        assert!(board.is_empty_side(PlayerId::TOP));
        assert_eq!(board.total_stones(), before);
    }

    #[test]
    fn test_winning_threshold() {
        assert_eq!(Board::default().winning_threshold(), 24);
        assert_eq!(Board::new(4, 3).winning_threshold(), 12);
    }

    #[test]
    fn test_display() {
        let board = Board::default();
        let text = board.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "P1 score: 0");
        assert_eq!(lines[1], "[ 4] [ 4] [ 4] [ 4] [ 4] [ 4]");
        assert_eq!(lines[3], "P0 score: 0");
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut board = Board::default();
        board.sow_from(3);
        board.add_score(PlayerId::TOP, 2);

        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
    }

    #[test]
    fn test_deserialize_rejects_wrong_pit_count() {
        let json = r#"{"config":{"pits_per_side":6,"initial_stones":4},"pits":[4,4,4,4],"scores":[0,0]}"#;
        let err = serde_json::from_str::<Board>(json).unwrap_err();
        assert!(err.to_string().contains("expected 12 pit counts, got 4"), "{err}");
    }

    #[test]
    fn test_deserialize_rejects_empty_config() {
        let json = r#"{"config":{"pits_per_side":0,"initial_stones":4},"pits":[],"scores":[0,0]}"#;
        assert!(serde_json::from_str::<Board>(json).is_err());
    }
}
