//! Monte Carlo Tree Search with UCT selection.
//!
//! The search builds a tree of [`SearchNode`]s rooted at the current
//! position and runs a fixed number of select / expand / simulate /
//! backpropagate iterations:
//!
//! - **Selection** descends while a node has children and is fully expanded,
//!   always taking the child with the highest UCT value. An unvisited child
//!   has infinite UCT and is therefore tried first.
//! - **Expansion** attaches one child for a legal move not yet in the tree.
//!   A node with no legal moves expands to nothing and the iteration is
//!   skipped.
//! - **Simulation** plays a uniformly-random game to the end
//!   ([`crate::playout::rollout`]).
//! - **Backpropagation** adds a visit and the unmodified rollout score to
//!   every node on the root-to-leaf path. Scores are always from the
//!   search-owning player's perspective; they are never sign-alternated
//!   per ply.
//!
//! Children own their subtrees; ancestry is tracked as a path of child
//! indices from the root, so no parent pointers are needed.

use crate::board::{Board, Color, Point};
use crate::constants::{EXPLORATION_PARAM, MCTS_ITERATIONS};
use crate::game::{available_moves, simulate_capture};
use crate::playout::rollout;

/// A node in the MCTS search tree.
pub struct SearchNode {
    /// Board snapshot at this node (an independent deep copy).
    board: Board,
    /// Color to move next from this position.
    to_move: Color,
    /// The move that produced this node; `None` only at the root.
    mv: Option<Point>,
    /// Number of times this node was visited during backpropagation.
    visits: u32,
    /// Cumulative rollout score from the search owner's perspective.
    wins: f64,
    /// Child nodes, one per expanded move, in expansion order.
    children: Vec<SearchNode>,
}

impl SearchNode {
    fn new(board: Board, to_move: Color, mv: Option<Point>) -> Self {
        Self {
            board,
            to_move,
            mv,
            visits: 0,
            wins: 0.0,
            children: Vec::new(),
        }
    }

    pub fn visits(&self) -> u32 {
        self.visits
    }

    pub fn children(&self) -> &[SearchNode] {
        &self.children
    }

    pub fn mv(&self) -> Option<Point> {
        self.mv
    }

    /// Average rollout score; 0.0 before the first visit.
    pub fn win_rate(&self) -> f64 {
        if self.visits > 0 {
            self.wins / self.visits as f64
        } else {
            0.0
        }
    }

    /// Every legal move from this position already has a child.
    fn fully_expanded(&self) -> bool {
        available_moves(&self.board, self.to_move).len() == self.children.len()
    }
}

/// MCTS engine configured with a fixed iteration budget and exploration
/// constant. Holds its own RNG so runs can be seeded for reproducibility.
pub struct MctsEngine {
    iterations: usize,
    exploration: f64,
    rng: fastrand::Rng,
}

impl Default for MctsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MctsEngine {
    /// Engine with the default iteration budget and exploration constant.
    pub fn new() -> Self {
        Self::with_config(MCTS_ITERATIONS, EXPLORATION_PARAM)
    }

    pub fn with_config(iterations: usize, exploration: f64) -> Self {
        Self {
            iterations,
            exploration,
            rng: fastrand::Rng::new(),
        }
    }

    /// Reseed the internal RNG.
    pub fn seed(&mut self, seed: u64) {
        self.rng = fastrand::Rng::with_seed(seed);
    }

    /// Pick the best move for `color`, or `None` if it has no legal move.
    ///
    /// The best move is the root child with the most visits; ties keep
    /// enumeration order.
    pub fn choose_move(&mut self, board: &Board, color: Color) -> Option<Point> {
        let root = self.search(board, color)?;
        best_child(&root).and_then(|c| c.mv)
    }

    /// Run the full search and return the root of the tree, or `None` if
    /// `color` has no legal move (no tree is built in that case).
    pub fn search(&mut self, board: &Board, color: Color) -> Option<SearchNode> {
        if available_moves(board, color).is_empty() {
            return None;
        }

        let mut root = SearchNode::new(board.clone(), color, None);
        for _ in 0..self.iterations {
            let mut path = self.select(&root);
            let node = node_at_mut(&mut root, &path);
            match expand(node) {
                Some(child_idx) => {
                    path.push(child_idx);
                    let leaf = node_at_mut(&mut root, &path);
                    let result = rollout(&leaf.board, leaf.to_move, color, &mut self.rng);
                    backpropagate(&mut root, &path, result);
                }
                // Terminal node: nothing to expand, skip this iteration.
                None => continue,
            }
        }
        Some(root)
    }

    /// Descend from the root along maximal-UCT children, returning the path
    /// of child indices to the first node that is unexpanded or not yet
    /// fully expanded.
    fn select(&self, root: &SearchNode) -> Vec<usize> {
        let mut path = Vec::new();
        let mut node = root;
        while !node.children.is_empty() && node.fully_expanded() {
            let idx = self.most_promising(node);
            path.push(idx);
            node = &node.children[idx];
        }
        path
    }

    /// Index of the child with the highest UCT value. Strict comparison
    /// keeps the first-enumerated child on ties.
    fn most_promising(&self, node: &SearchNode) -> usize {
        let mut best_idx = 0;
        let mut best_value = f64::NEG_INFINITY;
        for (idx, child) in node.children.iter().enumerate() {
            let value = self.uct(node, child);
            if value > best_value {
                best_value = value;
                best_idx = idx;
            }
        }
        best_idx
    }

    /// UCT = win rate + C * sqrt(ln(parent visits) / child visits).
    /// Unvisited children score +infinity so each gets tried once.
    fn uct(&self, parent: &SearchNode, child: &SearchNode) -> f64 {
        if child.visits == 0 {
            return f64::INFINITY;
        }
        let exploit = child.wins / child.visits as f64;
        let explore = ((parent.visits as f64).ln() / child.visits as f64).sqrt();
        exploit + self.exploration * explore
    }
}

/// Attach a child for one legal move not yet represented under `node`.
///
/// Returns the new child's index, or `None` when the node has no legal move
/// left to expand (in particular at terminal positions).
fn expand(node: &mut SearchNode) -> Option<usize> {
    let moves = available_moves(&node.board, node.to_move);
    if moves.is_empty() {
        return None;
    }

    for &dest in moves.keys() {
        if node.children.iter().any(|c| c.mv == Some(dest)) {
            continue;
        }
        let mut board = node.board.clone();
        simulate_capture(&mut board, &moves, dest, node.to_move);
        node.children
            .push(SearchNode::new(board, node.to_move.opponent(), Some(dest)));
        return Some(node.children.len() - 1);
    }
    None
}

/// Follow `path` from `root` to a mutable node reference.
fn node_at_mut<'a>(root: &'a mut SearchNode, path: &[usize]) -> &'a mut SearchNode {
    path.iter().fold(root, |node, &idx| &mut node.children[idx])
}

/// Add one visit and the unmodified rollout score to every node on the
/// path, root included. The score stays in the search owner's perspective
/// at every level.
fn backpropagate(root: &mut SearchNode, path: &[usize], result: f64) {
    let mut node = &mut *root;
    node.visits += 1;
    node.wins += result;
    for &idx in path {
        node = &mut node.children[idx];
        node.visits += 1;
        node.wins += result;
    }
}

/// Root child with the most visits; strict comparison keeps enumeration
/// order on ties.
fn best_child(root: &SearchNode) -> Option<&SearchNode> {
    let mut best: Option<&SearchNode> = None;
    let mut max_visits = 0;
    for child in &root.children {
        if child.visits > max_visits || best.is_none() {
            max_visits = child.visits;
            best = Some(child);
        }
    }
    best
}

/// Print per-child visit/win statistics for the root, for diagnostics.
pub fn dump_children(root: &SearchNode) {
    for child in root.children() {
        if let Some((x, y)) = child.mv() {
            eprintln!(
                "move ({x}, {y}) visits={} winrate={:.3}",
                child.visits(),
                child.win_rate()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Occupant;
    use crate::game::GameState;

    #[test]
    fn test_no_legal_move_builds_no_tree() {
        let mut engine = MctsEngine::with_config(100, EXPLORATION_PARAM);
        let mut board = Board::new();
        board.set(0, 0, Occupant::Black);
        assert!(engine.search(&board, Color::White).is_none());
        assert_eq!(engine.choose_move(&board, Color::White), None);
    }

    #[test]
    fn test_single_legal_move_is_returned() {
        let mut engine = MctsEngine::with_config(50, EXPLORATION_PARAM);
        engine.seed(1);
        let mut board = Board::new();
        board.set(0, 0, Occupant::Black);
        board.set(1, 0, Occupant::White);
        // (2, 0) is Black's only legal move.
        assert_eq!(engine.choose_move(&board, Color::Black), Some((2, 0)));
    }

    #[test]
    fn test_root_visits_match_completed_iterations() {
        let mut engine = MctsEngine::with_config(200, EXPLORATION_PARAM);
        engine.seed(42);
        let state = GameState::new();
        let root = engine.search(state.board(), Color::Black).unwrap();
        // Opening positions are never terminal, so no iteration is skipped.
        assert_eq!(root.visits(), 200);
        let child_visits: u32 = root.children().iter().map(|c| c.visits()).sum();
        assert_eq!(child_visits, 200);
    }

    #[test]
    fn test_root_children_cover_all_legal_moves() {
        let mut engine = MctsEngine::with_config(100, EXPLORATION_PARAM);
        engine.seed(9);
        let state = GameState::new();
        let root = engine.search(state.board(), Color::Black).unwrap();
        let moves = state.available_moves(Color::Black);
        assert_eq!(root.children().len(), moves.len());
        for child in root.children() {
            assert!(moves.contains_key(&child.mv().unwrap()));
        }
    }

    #[test]
    fn test_backpropagation_is_root_perspective() {
        // On a position Black has already effectively won, rollouts score
        // close to 1.0 for Black at every level; the root's win rate must
        // not be inverted on the way up.
        let mut engine = MctsEngine::with_config(100, EXPLORATION_PARAM);
        engine.seed(5);
        let mut board = Board::new();
        for x in 0..6 {
            board.set(x, 0, Occupant::Black);
        }
        board.set(6, 0, Occupant::White);
        // Black's only move (7, 0) wipes White out entirely.
        let root = engine.search(&board, Color::Black).unwrap();
        assert!(root.win_rate() > 0.9);
        for child in root.children() {
            assert!(child.win_rate() > 0.9);
        }
    }

    #[test]
    fn test_choose_move_is_deterministic_with_seed() {
        let state = GameState::new();
        let mut a = MctsEngine::with_config(300, EXPLORATION_PARAM);
        let mut b = MctsEngine::with_config(300, EXPLORATION_PARAM);
        a.seed(123);
        b.seed(123);
        assert_eq!(
            a.choose_move(state.board(), Color::Black),
            b.choose_move(state.board(), Color::Black)
        );
    }
}
