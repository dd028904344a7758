//! Constants for board geometry, search parameters, and the positional
//! weight table.
//!
//! All engine tuning lives here; engines take these values explicitly at
//! construction so each one stays independently testable.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (8x8, fixed by the rules of Othello).
pub const BOARD_SIZE: usize = 8;

/// Offsets to the 8 neighboring cells of a point, as (dx, dy).
/// Order: N, S, W, E, NW, NE, SW, SE.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

// =============================================================================
// Minimax Parameters
// =============================================================================

/// Default minimax search depth in plies.
pub const MINIMAX_DEPTH: u32 = 4;

/// Positional weights for the static evaluator, indexed as `[x][y]`.
///
/// Corners are decisive in Othello, cells adjacent to an open corner hand
/// the corner to the opponent, and edges are generally stable. The table
/// is symmetric under all board reflections.
pub const BOARD_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

// =============================================================================
// MCTS (Monte Carlo Tree Search) Parameters
// =============================================================================

/// Default number of MCTS iterations per move decision.
pub const MCTS_ITERATIONS: usize = 1000;

/// UCT exploration constant (~sqrt 2, the canonical UCB1 value).
pub const EXPLORATION_PARAM: f64 = 1.41;

// =============================================================================
// External Input Limits
// =============================================================================

/// Required number of entries in a heatmap table (one per cell, row-major).
pub const HEATMAP_LEN: usize = BOARD_SIZE * BOARD_SIZE;

/// Maximum allowed heatmap score per cell.
pub const HEATMAP_MAX: u32 = 100;
