//! Computer-vs-computer match driver.

use tracing::warn;

use crate::core::PlayerId;
use crate::search::CpuPlayer;

use super::controller::GameController;

/// Play `game` to the end with `bottom` and `top` choosing every move.
///
/// A player whose search returns no move is passed over. Games still
/// running after `max_moves` turns are finished on the spot, each player
/// keeping the stones on their own side.
pub fn play_match(
    mut game: GameController,
    bottom: &mut CpuPlayer,
    top: &mut CpuPlayer,
    max_moves: usize,
) -> GameController {
    debug_assert_eq!(bottom.player(), PlayerId::BOTTOM);
    debug_assert_eq!(top.player(), PlayerId::TOP);

    for _ in 0..max_moves {
        if game.is_over() {
            break;
        }

        let cpu = if game.current_player() == PlayerId::BOTTOM {
            &mut *bottom
        } else {
            &mut *top
        };

        match cpu.get_move(game.board()) {
            Some(pit) => {
                if let Err(err) = game.play(pit) {
                    warn!(%err, pit, "search chose a rejected move");
                    game.pass_turn();
                }
            }
            None => game.pass_turn(),
        }
    }

    if !game.is_over() {
        game.finish();
    }
    game
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Difficulty, SearchConfig};

    #[test]
    fn test_match_runs_to_completion() {
        let config = SearchConfig::default().with_seed(11);
        let mut bottom = CpuPlayer::new(PlayerId::BOTTOM, Difficulty::Easy, config.clone());
        let mut top = CpuPlayer::new(PlayerId::TOP, Difficulty::Medium, config.with_seed(12));

        let game = play_match(GameController::default(), &mut bottom, &mut top, 500);

        assert!(game.is_over());
        assert!(game.result().is_some());
        assert_eq!(game.board().total_stones(), 48);
        assert!(game.board().pits().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_move_cap_finishes_game() {
        let config = SearchConfig::default();
        let mut bottom = CpuPlayer::new(PlayerId::BOTTOM, Difficulty::Easy, config.clone());
        let mut top = CpuPlayer::new(PlayerId::TOP, Difficulty::Easy, config);

        let game = play_match(GameController::default(), &mut bottom, &mut top, 3);

        assert!(game.is_over());
        assert!(game.history().len() <= 3);
        assert_eq!(game.board().total_stones(), 48);
    }
}
