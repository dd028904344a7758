//! Depth-limited minimax search with alpha-beta pruning.
//!
//! The engine explores hypothetical futures on private board copies, never
//! touching the live game. A transient [`MiniNode`] tree records the
//! positions visited by one `choose_move` call and is dropped when the call
//! returns. Leaves are scored by a static positional evaluator: the weight
//! table summed over the maximizer's discs minus the same sum over the
//! minimizer's.

use crate::board::{Board, Color, Point};
use crate::constants::{BOARD_SIZE, BOARD_WEIGHTS, MINIMAX_DEPTH};
use crate::game::{available_moves, is_game_over, simulate_capture};

/// A node in the transient minimax tree: a board snapshot plus the child
/// positions expanded under it.
struct MiniNode {
    board: Board,
    children: Vec<MiniNode>,
}

impl MiniNode {
    fn new(board: Board) -> Self {
        Self {
            board,
            children: Vec::new(),
        }
    }
}

/// Minimax engine configured with a fixed search depth and weight table.
pub struct MinimaxEngine {
    depth: u32,
    weights: [[i32; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimaxEngine {
    /// Engine with the default depth and positional weights.
    pub fn new() -> Self {
        Self::with_config(MINIMAX_DEPTH, BOARD_WEIGHTS)
    }

    pub fn with_config(depth: u32, weights: [[i32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { depth, weights }
    }

    /// Pick the best move for `color`, or `None` if it has no legal move.
    ///
    /// Root moves are tried in enumeration order; only a strictly better
    /// score replaces the current best, so the first move wins ties.
    pub fn choose_move(&self, board: &Board, color: Color) -> Option<Point> {
        let moves = available_moves(board, color);
        if moves.is_empty() {
            return None;
        }

        let mut root = MiniNode::new(board.clone());
        let mut best: Option<Point> = None;
        let mut best_score = i32::MIN;
        let mut alpha = i32::MIN;
        let beta = i32::MAX;

        for &dest in moves.keys() {
            let mut child_board = board.clone();
            simulate_capture(&mut child_board, &moves, dest, color);
            let mut child = MiniNode::new(child_board);
            let score = self.evaluate(
                &mut child,
                self.depth.saturating_sub(1),
                alpha,
                beta,
                false,
                color,
            );
            root.children.push(child);
            if score > best_score {
                best_score = score;
                best = Some(dest);
            }
            alpha = alpha.max(best_score);
        }
        best
    }

    /// Score `board` with a fresh search of the given depth, with the full
    /// alpha-beta window. `maximizing` says whose turn it is relative to
    /// `maximizer`.
    pub fn search_score(
        &self,
        board: &Board,
        depth: u32,
        maximizing: bool,
        maximizer: Color,
    ) -> i32 {
        let mut node = MiniNode::new(board.clone());
        self.evaluate(&mut node, depth, i32::MIN, i32::MAX, maximizing, maximizer)
    }

    /// Recursive alpha-beta evaluation of `node`.
    ///
    /// Terminal at depth 0 or when neither side can move. A side to move
    /// with no legal move passes: the search recurses on the same board one
    /// ply shallower with the roles swapped.
    fn evaluate(
        &self,
        node: &mut MiniNode,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        maximizer: Color,
    ) -> i32 {
        if depth == 0 || is_game_over(&node.board) {
            return self.static_eval(&node.board, maximizer);
        }

        let to_move = if maximizing { maximizer } else { maximizer.opponent() };
        let moves = available_moves(&node.board, to_move);
        if moves.is_empty() {
            // Turn passes without a move being applied.
            return self.evaluate(node, depth - 1, alpha, beta, !maximizing, maximizer);
        }

        if maximizing {
            let mut max_eval = i32::MIN;
            for &dest in moves.keys() {
                let mut board = node.board.clone();
                simulate_capture(&mut board, &moves, dest, to_move);
                let mut child = MiniNode::new(board);
                let eval = self.evaluate(&mut child, depth - 1, alpha, beta, false, maximizer);
                node.children.push(child);
                max_eval = max_eval.max(eval);
                alpha = alpha.max(max_eval);
                if beta <= alpha {
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            for &dest in moves.keys() {
                let mut board = node.board.clone();
                simulate_capture(&mut board, &moves, dest, to_move);
                let mut child = MiniNode::new(board);
                let eval = self.evaluate(&mut child, depth - 1, alpha, beta, true, maximizer);
                node.children.push(child);
                min_eval = min_eval.min(eval);
                beta = beta.min(min_eval);
                if beta <= alpha {
                    break;
                }
            }
            min_eval
        }
    }

    /// Static positional evaluation: weight-table sum over the maximizer's
    /// discs minus the sum over the minimizer's.
    pub fn static_eval(&self, board: &Board, maximizer: Color) -> i32 {
        let max_occ = maximizer.occupant();
        let min_occ = maximizer.opponent().occupant();
        let mut score = 0;
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                let occupant = board.get(x, y);
                if occupant == max_occ {
                    score += self.weights[x][y];
                } else if occupant == min_occ {
                    score -= self.weights[x][y];
                }
            }
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Occupant;
    use crate::game::GameState;

    #[test]
    fn test_depth_zero_is_static_eval() {
        let engine = MinimaxEngine::new();
        let state = GameState::new();
        let score = engine.search_score(state.board(), 0, true, Color::Black);
        assert_eq!(score, engine.static_eval(state.board(), Color::Black));
    }

    #[test]
    fn test_static_eval_is_antisymmetric() {
        let engine = MinimaxEngine::new();
        let mut state = GameState::new();
        let moves = state.available_moves(Color::Black);
        state.apply_move(Color::Black, &moves, (2, 3));
        let black = engine.static_eval(state.board(), Color::Black);
        let white = engine.static_eval(state.board(), Color::White);
        assert_eq!(black, -white);
    }

    #[test]
    fn test_no_legal_move_returns_none() {
        let engine = MinimaxEngine::new();
        let mut board = Board::new();
        board.set(0, 0, Occupant::Black);
        assert_eq!(engine.choose_move(&board, Color::White), None);
        assert_eq!(engine.choose_move(&board, Color::Black), None);
    }

    #[test]
    fn test_finds_the_only_move() {
        let engine = MinimaxEngine::new();
        let mut board = Board::new();
        board.set(0, 0, Occupant::Black);
        board.set(1, 0, Occupant::White);
        assert_eq!(engine.choose_move(&board, Color::Black), Some((2, 0)));
    }

    #[test]
    fn test_prefers_corner_capture() {
        let engine = MinimaxEngine::with_config(1, BOARD_WEIGHTS);
        let mut board = Board::new();
        // Black can take the (0,0) corner or a nearly worthless mid-edge
        // cell; depth 1 reduces to the static evaluator, which must pick
        // the corner.
        board.set(1, 0, Occupant::White);
        board.set(2, 0, Occupant::Black);
        board.set(4, 3, Occupant::White);
        board.set(4, 4, Occupant::Black);
        let moves = available_moves(&board, Color::Black);
        assert!(moves.contains_key(&(0, 0)));
        assert!(moves.len() > 1);
        assert_eq!(engine.choose_move(&board, Color::Black), Some((0, 0)));
    }

    #[test]
    fn test_depth_one_picks_best_static_child() {
        let engine = MinimaxEngine::with_config(1, BOARD_WEIGHTS);
        let state = GameState::new();
        let moves = state.available_moves(Color::Black);
        let chosen = engine.choose_move(state.board(), Color::Black).unwrap();

        // Recompute the best child by hand and require agreement.
        let mut best = None;
        let mut best_score = i32::MIN;
        for &dest in moves.keys() {
            let mut board = state.board().clone();
            simulate_capture(&mut board, &moves, dest, Color::Black);
            let score = engine.static_eval(&board, Color::Black);
            if score > best_score {
                best_score = score;
                best = Some(dest);
            }
        }
        assert_eq!(chosen, best.unwrap());
    }
}
