//! Final game result.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerPair};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Decide the result from final scores.
    #[must_use]
    pub fn from_scores(scores: PlayerPair<u32>) -> Self {
        let bottom = scores[PlayerId::BOTTOM];
        let top = scores[PlayerId::TOP];
        match bottom.cmp(&top) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::BOTTOM),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::TOP),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_scores() {
        assert_eq!(
            GameResult::from_scores(PlayerPair::from([25, 23])),
            GameResult::Winner(PlayerId::BOTTOM)
        );
        assert_eq!(
            GameResult::from_scores(PlayerPair::from([10, 38])),
            GameResult::Winner(PlayerId::TOP)
        );
        assert_eq!(GameResult::from_scores(PlayerPair::from([24, 24])), GameResult::Draw);
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::TOP);
        assert!(!result.is_winner(PlayerId::BOTTOM));
        assert!(result.is_winner(PlayerId::TOP));
        assert_eq!(result.winner(), Some(PlayerId::TOP));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::BOTTOM));
        assert_eq!(draw.winner(), None);
    }
}
