//! Raw board export and import.
//!
//! A snapshot is the minimal state a persistence layer needs to suspend
//! and resume a game: every pit count in index order, both scores, and
//! whose turn it is. Board dimensions are not stored; the importer
//! supplies a `BoardConfig` and the pit vector must match it exactly.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::config::BoardConfig;
use super::player::{PlayerId, PlayerPair};
use crate::error::SnapshotError;

/// Serializable board state plus the player to move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Pit counts, index 0 first.
    pub pits: Vec<u32>,
    /// `[player 0, player 1]` scores.
    pub scores: [u32; 2],
    /// Raw id of the player to move.
    pub current_player: u8,
}

impl GameSnapshot {
    /// Encode as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode from compact binary.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Board {
    /// Export the board together with the player to move.
    #[must_use]
    pub fn export(&self, current_player: PlayerId) -> GameSnapshot {
        GameSnapshot {
            pits: self.pits().to_vec(),
            scores: self.scores().into_array(),
            current_player: current_player.0,
        }
    }

    /// Rebuild a board from a snapshot.
    ///
    /// Rejects a pit vector whose length is not `config.total_pits()` and
    /// a player id other than 0 or 1.
    pub fn import(
        config: BoardConfig,
        snapshot: &GameSnapshot,
    ) -> Result<(Board, PlayerId), SnapshotError> {
        config.validate()?;

        if snapshot.pits.len() != config.total_pits() {
            return Err(SnapshotError::PitCountMismatch {
                expected: config.total_pits(),
                actual: snapshot.pits.len(),
            });
        }

        let player = PlayerId::from_raw(snapshot.current_player)
            .ok_or(SnapshotError::UnknownPlayer(snapshot.current_player))?;

        let board = Board::from_parts(
            config,
            snapshot.pits.iter().copied().collect(),
            PlayerPair::from(snapshot.scores),
        );
        Ok((board, player))
    }
}
