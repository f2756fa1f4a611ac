//! Computer opponent: move selection by difficulty tier.
//!
//! - **Easy**: uniform random legal move.
//! - **Medium**: random with probability `medium_random_rate`, otherwise
//!   the legal move with the largest immediate capture.
//! - **Hard**: random while the board is untouched, otherwise alpha-beta
//!   minimax, falling back to random if the search yields no move.
//!
//! Randomness always comes from a caller-supplied [`GameRng`]. Selection
//! reads the board and explores clones; it never mutates the board.

use tracing::debug;

use crate::core::{Board, GameRng, PlayerId};
use crate::rules::{legal_moves, simulate_move};

use super::config::SearchConfig;
use super::difficulty::Difficulty;
use super::minimax::minimax;
use super::stats::SearchStats;

/// Pick a move for `player` with the default [`SearchConfig`].
///
/// Returns `None` only when the player has no legal move.
pub fn get_move(
    board: &Board,
    player: PlayerId,
    difficulty: Difficulty,
    rng: &mut GameRng,
) -> Option<usize> {
    select_move(board, player, difficulty, &SearchConfig::default(), rng).0
}

/// Pick a move for `player` with explicit tuning.
pub fn get_move_with(
    board: &Board,
    player: PlayerId,
    difficulty: Difficulty,
    config: &SearchConfig,
    rng: &mut GameRng,
) -> Option<usize> {
    select_move(board, player, difficulty, config, rng).0
}

/// The legal move capturing the most stones right now.
///
/// Ties keep the earliest move in `legal`.
#[must_use]
pub fn greedy_move(board: &Board, player: PlayerId, legal: &[usize]) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;

    for &pit in legal {
        let Ok(outcome) = simulate_move(board, player, pit) else {
            continue;
        };
        if best.map_or(true, |(_, captured)| outcome.captured > captured) {
            best = Some((pit, outcome.captured));
        }
    }

    best.map(|(pit, _)| pit).or_else(|| legal.first().copied())
}

fn select_move(
    board: &Board,
    player: PlayerId,
    difficulty: Difficulty,
    config: &SearchConfig,
    rng: &mut GameRng,
) -> (Option<usize>, Option<SearchStats>) {
    let legal = legal_moves(board, player);
    if legal.is_empty() {
        return (None, None);
    }

    match difficulty {
        Difficulty::Easy => (rng.choose(&legal), None),
        Difficulty::Medium => {
            if rng.gen_bool(config.medium_random_rate) {
                (rng.choose(&legal), None)
            } else {
                (greedy_move(board, player, &legal), None)
            }
        }
        Difficulty::Hard => {
            if board.is_initial_position() {
                return (rng.choose(&legal), None);
            }

            let outcome = minimax(board, player, config.hard_depth);
            debug!(
                %player,
                depth = config.hard_depth,
                value = outcome.value,
                best_move = ?outcome.best_move,
                nodes = outcome.stats.nodes,
                cutoffs = outcome.stats.cutoffs,
                time_us = outcome.stats.time_us,
                nodes_per_sec = outcome.stats.nodes_per_second(),
                "minimax search finished"
            );

            let choice = outcome.best_move.or_else(|| rng.choose(&legal));
            (choice, Some(outcome.stats))
        }
    }
}

/// A computer player with its own difficulty and random source.
#[derive(Clone, Debug)]
pub struct CpuPlayer {
    player: PlayerId,
    difficulty: Difficulty,
    config: SearchConfig,
    rng: GameRng,
    last_stats: Option<SearchStats>,
}

impl CpuPlayer {
    /// Create a computer player seeded from `config.seed`.
    pub fn new(player: PlayerId, difficulty: Difficulty, config: SearchConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            player,
            difficulty,
            config,
            rng,
            last_stats: None,
        }
    }

    /// Replace the random source.
    #[must_use]
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    /// The side this player moves for.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Current difficulty.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Change difficulty between moves.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Statistics from the most recent Hard-tier search, if any.
    #[must_use]
    pub fn last_stats(&self) -> Option<&SearchStats> {
        self.last_stats.as_ref()
    }

    /// True if this player can move on `board`.
    #[must_use]
    pub fn has_legal_moves(&self, board: &Board) -> bool {
        !legal_moves(board, self.player).is_empty()
    }

    /// Choose a pit, or `None` if there is no legal move.
    pub fn get_move(&mut self, board: &Board) -> Option<usize> {
        let (choice, stats) =
            select_move(board, self.player, self.difficulty, &self.config, &mut self.rng);
        self.last_stats = stats;
        debug!(player = %self.player, difficulty = %self.difficulty, choice = ?choice, "cpu move selected");
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardConfig, GameSnapshot};

    fn position(pits: [u32; 12], scores: [u32; 2]) -> Board {
        let snapshot = GameSnapshot {
            pits: pits.to_vec(),
            scores,
            current_player: 0,
        };
        Board::import(BoardConfig::default(), &snapshot).unwrap().0
    }

    #[test]
    fn test_every_tier_returns_legal_move() {
        let board = position([5, 0, 3, 1, 2, 6, 4, 1, 0, 2, 3, 5], [8, 8]);
        let mut rng = GameRng::new(1);

        for difficulty in Difficulty::ALL {
            for player in PlayerId::all() {
                let legal = legal_moves(&board, player);
                let pit = get_move(&board, player, difficulty, &mut rng).unwrap();
                assert!(legal.contains(&pit), "{difficulty} chose {pit}");
            }
        }
    }

    #[test]
    fn test_no_legal_move_is_none() {
        let board = position([0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0], [20, 25]);
        let mut rng = GameRng::new(1);
        for difficulty in Difficulty::ALL {
            assert_eq!(get_move(&board, PlayerId::BOTTOM, difficulty, &mut rng), None);
        }
    }

    #[test]
    fn test_greedy_prefers_biggest_capture() {
        let board = position([0, 0, 0, 0, 2, 2, 1, 2, 4, 0, 0, 0], [0, 0]);
        let legal = legal_moves(&board, PlayerId::BOTTOM);
        assert_eq!(greedy_move(&board, PlayerId::BOTTOM, &legal), Some(5));
    }

    #[test]
    fn test_greedy_ties_keep_first() {
        let board = Board::default();
        let legal = legal_moves(&board, PlayerId::BOTTOM);
        assert_eq!(greedy_move(&board, PlayerId::BOTTOM, &legal), Some(0));
    }

    #[test]
    fn test_medium_without_randomness_is_greedy() {
        let board = position([0, 0, 0, 0, 2, 2, 1, 2, 4, 0, 0, 0], [0, 0]);
        let config = SearchConfig::default().with_random_rate(0.0);
        let mut rng = GameRng::new(9);

        for _ in 0..10 {
            let pit = get_move_with(&board, PlayerId::BOTTOM, Difficulty::Medium, &config, &mut rng);
            assert_eq!(pit, Some(5));
        }
    }

    #[test]
    fn test_medium_with_nan_rate_plays_greedy() {
        let config = SearchConfig::default().with_random_rate(f64::NAN);
        let mut rng = GameRng::new(1);

        let pit = get_move_with(&Board::default(), PlayerId::BOTTOM, Difficulty::Medium, &config, &mut rng);
        assert_eq!(pit, Some(0));
    }

    #[test]
    fn test_easy_is_reproducible_by_seed() {
        let board = Board::default();
        let picks = |seed| {
            let mut rng = GameRng::new(seed);
            (0..20)
                .map(|_| get_move(&board, PlayerId::TOP, Difficulty::Easy, &mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(5), picks(5));
    }

    #[test]
    fn test_hard_opening_is_random_but_legal() {
        let board = Board::default();
        let mut cpu = CpuPlayer::new(PlayerId::BOTTOM, Difficulty::Hard, SearchConfig::default());
        let pit = cpu.get_move(&board).unwrap();
        assert!(pit < 6);
        assert!(cpu.last_stats().is_none());
    }

    #[test]
    fn test_hard_is_deterministic_past_opening() {
        let board = position([5, 0, 3, 1, 2, 6, 4, 1, 0, 2, 3, 5], [8, 8]);
        let mut a = CpuPlayer::new(PlayerId::BOTTOM, Difficulty::Hard, SearchConfig::default().with_seed(1));
        let mut b = CpuPlayer::new(PlayerId::BOTTOM, Difficulty::Hard, SearchConfig::default().with_seed(2));

        let first = a.get_move(&board);
        assert!(first.is_some());
        assert_eq!(b.get_move(&board), first);
        assert_eq!(a.get_move(&board), first);
        assert!(a.last_stats().is_some());
    }

    #[test]
    fn test_hard_decided_position_falls_back_to_random() {
        let board = position([1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], [25, 11]);
        let mut rng = GameRng::new(3);
        let pit = get_move(&board, PlayerId::TOP, Difficulty::Hard, &mut rng).unwrap();
        assert!((6..12).contains(&pit));
    }

    #[test]
    fn test_set_difficulty() {
        let mut cpu = CpuPlayer::new(PlayerId::TOP, Difficulty::Easy, SearchConfig::default());
        cpu.set_difficulty(Difficulty::Hard);
        assert_eq!(cpu.difficulty(), Difficulty::Hard);
        assert_eq!(cpu.player(), PlayerId::TOP);
        assert!(cpu.has_legal_moves(&Board::default()));
    }
}
