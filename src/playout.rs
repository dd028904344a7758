//! Random playouts: the simulation phase of MCTS.
//!
//! A playout plays uniformly-random legal moves for both colors alternately,
//! skipping a color with no legal move, until neither color has one, then
//! scores the final position by disc count.

use crate::board::{Board, Color, Point};
use crate::game::{available_moves, simulate_capture};

/// Play a random game to the end from `board` with `to_move` acting first.
///
/// Returns the result from `pov`'s perspective: 1.0 for a win, 0.0 for a
/// loss, 0.5 for a draw.
pub fn rollout(board: &Board, to_move: Color, pov: Color, rng: &mut fastrand::Rng) -> f64 {
    let mut board = board.clone();
    let mut current = to_move;

    loop {
        let moves = available_moves(&board, current);
        if moves.is_empty() {
            if available_moves(&board, current.opponent()).is_empty() {
                break;
            }
            // Skip the moveless color.
            current = current.opponent();
            continue;
        }

        let dests: Vec<Point> = moves.keys().copied().collect();
        let dest = dests[rng.usize(..dests.len())];
        simulate_capture(&mut board, &moves, dest, current);
        current = current.opponent();
    }

    score(&board, pov)
}

/// Compare final disc counts from `pov`'s perspective.
fn score(board: &Board, pov: Color) -> f64 {
    let own = board.count(pov);
    let other = board.count(pov.opponent());
    match own.cmp(&other) {
        std::cmp::Ordering::Greater => 1.0,
        std::cmp::Ordering::Less => 0.0,
        std::cmp::Ordering::Equal => 0.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Occupant;
    use crate::game::GameState;

    #[test]
    fn test_rollout_terminates_and_scores() {
        let state = GameState::new();
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..20 {
            let result = rollout(state.board(), Color::Black, Color::Black, &mut rng);
            assert!(result == 0.0 || result == 0.5 || result == 1.0);
        }
    }

    #[test]
    fn test_rollout_scores_are_complementary() {
        let state = GameState::new();
        let mut rng_a = fastrand::Rng::with_seed(11);
        let mut rng_b = fastrand::Rng::with_seed(11);
        let black = rollout(state.board(), Color::Black, Color::Black, &mut rng_a);
        let white = rollout(state.board(), Color::Black, Color::White, &mut rng_b);
        assert_eq!(black + white, 1.0);
    }

    #[test]
    fn test_finished_position_scores_without_moves() {
        let mut board = Board::new();
        board.set(0, 0, Occupant::Black);
        board.set(1, 1, Occupant::Black);
        board.set(7, 7, Occupant::White);
        let mut rng = fastrand::Rng::with_seed(3);
        // Neither side can move; the rollout must score immediately.
        assert_eq!(rollout(&board, Color::Black, Color::Black, &mut rng), 1.0);
        assert_eq!(rollout(&board, Color::Black, Color::White, &mut rng), 0.0);
    }
}
