//! Session log persisted as JSON.
//!
//! File layout:
//!
//! ```json
//! {
//!   "history": [{ "timestamp": "2026-01-01T12:00:00Z", "winner": "1", "scores": [20, 28] }],
//!   "cumulative": { "games_played": 1, "wins": { "0": 0, "1": 1 }, "draws": 0 },
//!   "current": { "pits": [...], "scores": [0, 0], "current_player": 0 }
//! }
//! ```
//!
//! `current` is only present when a game was suspended.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::core::{GameSnapshot, PlayerId, PlayerPair};
use crate::error::SessionError;
use crate::rules::GameResult;

/// Winner tag stored in the history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchWinner {
    #[serde(rename = "0")]
    Bottom,
    #[serde(rename = "1")]
    Top,
    #[serde(rename = "draw")]
    Draw,
}

impl From<GameResult> for MatchWinner {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::Winner(PlayerId::BOTTOM) => MatchWinner::Bottom,
            GameResult::Winner(_) => MatchWinner::Top,
            GameResult::Draw => MatchWinner::Draw,
        }
    }
}

/// One finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// When the result was recorded (UTC).
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub winner: MatchWinner,
    /// Final `[player 0, player 1]` scores.
    pub scores: [u32; 2],
}

/// Win counts keyed the way the file stores them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinCounts {
    #[serde(rename = "0")]
    pub bottom: u32,
    #[serde(rename = "1")]
    pub top: u32,
}

/// Totals across every recorded game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CumulativeStats {
    pub games_played: u32,
    pub wins: WinCounts,
    pub draws: u32,
}

/// Flat view of [`CumulativeStats`] for display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub games_played: u32,
    pub wins_p0: u32,
    pub wins_p1: u32,
    pub draws: u32,
}

#[derive(Serialize)]
struct SessionFileOut<'a> {
    history: &'a [MatchRecord],
    cumulative: &'a CumulativeStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    current: Option<&'a GameSnapshot>,
}

#[derive(Deserialize)]
struct SessionFileIn {
    #[serde(default)]
    history: Vec<MatchRecord>,
    cumulative: Option<CumulativeStats>,
    current: Option<GameSnapshot>,
}

/// History of finished games plus running totals.
#[derive(Clone, Debug, Default)]
pub struct SessionLog {
    history: Vec<MatchRecord>,
    cumulative: CumulativeStats,
    autosave_path: Option<PathBuf>,
}

impl SessionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Save after every recorded match.
    #[must_use]
    pub fn with_autosave(mut self, path: impl Into<PathBuf>) -> Self {
        self.autosave_path = Some(path.into());
        self
    }

    /// Recorded games, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MatchRecord] {
        &self.history
    }

    #[must_use]
    pub fn cumulative(&self) -> &CumulativeStats {
        &self.cumulative
    }

    /// Record a finished game from its final scores.
    ///
    /// Autosave failures are logged and otherwise ignored.
    pub fn record_match(&mut self, scores: PlayerPair<u32>) -> &MatchRecord {
        let winner = MatchWinner::from(GameResult::from_scores(scores));

        self.cumulative.games_played += 1;
        match winner {
            MatchWinner::Bottom => self.cumulative.wins.bottom += 1,
            MatchWinner::Top => self.cumulative.wins.top += 1,
            MatchWinner::Draw => self.cumulative.draws += 1,
        }

        self.history.push(MatchRecord {
            timestamp: OffsetDateTime::now_utc(),
            winner,
            scores: scores.into_array(),
        });

        if let Some(path) = &self.autosave_path {
            if let Err(err) = self.save(path, None) {
                warn!(%err, "session autosave failed");
            }
        }

        &self.history[self.history.len() - 1]
    }

    /// Totals flattened for display.
    #[must_use]
    pub fn stats_summary(&self) -> StatsSummary {
        StatsSummary {
            games_played: self.cumulative.games_played,
            wins_p0: self.cumulative.wins.bottom,
            wins_p1: self.cumulative.wins.top,
            draws: self.cumulative.draws,
        }
    }

    /// Write history, totals and an optional suspended game to `path`.
    pub fn save(&self, path: impl AsRef<Path>, current: Option<&GameSnapshot>) -> Result<(), SessionError> {
        let path = path.as_ref();
        let file = SessionFileOut {
            history: &self.history,
            cumulative: &self.cumulative,
            current,
        };

        let json = serde_json::to_string_pretty(&file).map_err(|source| SessionError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), games = self.history.len(), "session saved");
        Ok(())
    }

    /// Replace history and totals with the contents of `path`.
    ///
    /// Returns the suspended game, if the file holds one. Totals missing
    /// from the file are kept as they were.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<Option<GameSnapshot>, SessionError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: SessionFileIn = serde_json::from_str(&json).map_err(|source| SessionError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        self.history = file.history;
        if let Some(cumulative) = file.cumulative {
            self.cumulative = cumulative;
        }

        debug!(path = %path.display(), games = self.history.len(), "session loaded");
        Ok(file.current)
    }
}
