//! Move-selection strategies.
//!
//! The strategy set is closed: a tagged [`Strategy`] enum behind a single
//! choose-move capability, rather than an open trait hierarchy. The two
//! lightweight auxiliary strategies consume externally produced inputs (a
//! per-cell heatmap table and an opaque scoring oracle) as read-only black
//! boxes; malformed inputs fail at construction, never with invented
//! fallback values.

use std::fmt;

use crate::board::{Board, Color, Point};
use crate::constants::{BOARD_SIZE, HEATMAP_LEN, HEATMAP_MAX};
use crate::game::available_moves;
use crate::mcts::MctsEngine;
use crate::minimax::MinimaxEngine;

/// An opaque external scorer: (board, color, candidate destination) -> score.
pub type OracleFn = Box<dyn Fn(&Board, Color, Point) -> f64>;

/// Construction-time failures of the auxiliary strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    /// The heatmap table did not have exactly one entry per cell.
    HeatmapLength(usize),
    /// A heatmap entry was outside the allowed score range.
    HeatmapScore { x: usize, y: usize, score: u32 },
    /// No strategy is registered under the given name.
    UnknownStrategy(String),
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyError::HeatmapLength(len) => {
                write!(f, "heatmap has {len} entries, expected {HEATMAP_LEN}")
            }
            StrategyError::HeatmapScore { x, y, score } => {
                write!(
                    f,
                    "heatmap score {score} at ({x}, {y}) exceeds {HEATMAP_MAX}"
                )
            }
            StrategyError::UnknownStrategy(name) => {
                write!(f, "unknown strategy '{name}' (expected random, minimax, or mcts)")
            }
        }
    }
}

impl std::error::Error for StrategyError {}

/// Strategy weighting legal destinations by an externally supplied 8x8
/// score table.
#[derive(Debug)]
pub struct HeatmapStrategy {
    heat: [[u32; BOARD_SIZE]; BOARD_SIZE],
}

impl HeatmapStrategy {
    /// Build from a 64-entry row-major table with scores in `0..=100`.
    pub fn new(entries: &[u32]) -> Result<Self, StrategyError> {
        if entries.len() != HEATMAP_LEN {
            return Err(StrategyError::HeatmapLength(entries.len()));
        }
        let mut heat = [[0u32; BOARD_SIZE]; BOARD_SIZE];
        for (idx, &score) in entries.iter().enumerate() {
            let (x, y) = (idx % BOARD_SIZE, idx / BOARD_SIZE);
            if score > HEATMAP_MAX {
                return Err(StrategyError::HeatmapScore { x, y, score });
            }
            heat[x][y] = score;
        }
        Ok(Self { heat })
    }

    /// Legal destination with the highest tabulated score; the first
    /// destination in enumeration order wins ties.
    fn choose(&self, board: &Board, color: Color) -> Option<Point> {
        let moves = available_moves(board, color);
        let mut best: Option<Point> = None;
        let mut best_score = 0;
        for &(x, y) in moves.keys() {
            if best.is_none() || self.heat[x][y] > best_score {
                best_score = self.heat[x][y];
                best = Some((x, y));
            }
        }
        best
    }
}

/// Strategy delegating scoring to an externally trained per-cell oracle.
///
/// Black takes the maximum-scoring destination and White the minimum,
/// matching the regression model the oracle was trained as.
pub struct OracleStrategy {
    scorer: OracleFn,
}

impl OracleStrategy {
    pub fn new(scorer: OracleFn) -> Self {
        Self { scorer }
    }

    fn choose(&self, board: &Board, color: Color) -> Option<Point> {
        let moves = available_moves(board, color);
        let mut best: Option<(Point, f64)> = None;
        for &dest in moves.keys() {
            let score = (self.scorer)(board, color, dest);
            let better = match best {
                None => true,
                Some((_, best_score)) => match color {
                    Color::Black => score > best_score,
                    Color::White => score < best_score,
                },
            };
            if better {
                best = Some((dest, score));
            }
        }
        best.map(|(dest, _)| dest)
    }
}

/// The closed set of move-selection strategies.
pub enum Strategy {
    /// Uniformly-random legal destination.
    Random(fastrand::Rng),
    /// Depth-limited alpha-beta search.
    Minimax(MinimaxEngine),
    /// Monte Carlo tree search.
    Mcts(MctsEngine),
    /// Externally supplied per-cell score table.
    Heatmap(HeatmapStrategy),
    /// Externally trained scoring oracle.
    Oracle(OracleStrategy),
}

impl Strategy {
    /// Build one of the built-in strategies by CLI name.
    pub fn from_name(name: &str) -> Result<Self, StrategyError> {
        match name.to_ascii_lowercase().as_str() {
            "random" => Ok(Strategy::Random(fastrand::Rng::new())),
            "minimax" => Ok(Strategy::Minimax(MinimaxEngine::new())),
            "mcts" => Ok(Strategy::Mcts(MctsEngine::new())),
            other => Err(StrategyError::UnknownStrategy(other.to_string())),
        }
    }

    /// Reseed any internal randomness, for reproducible runs.
    pub fn seed(&mut self, seed: u64) {
        match self {
            Strategy::Random(rng) => *rng = fastrand::Rng::with_seed(seed),
            Strategy::Mcts(engine) => engine.seed(seed),
            _ => {}
        }
    }

    /// Choose a destination for `color` on `board`, or `None` when the
    /// color has no legal move (the caller must skip the turn).
    pub fn choose_move(&mut self, board: &Board, color: Color) -> Option<Point> {
        match self {
            Strategy::Random(rng) => {
                let moves = available_moves(board, color);
                if moves.is_empty() {
                    return None;
                }
                let dests: Vec<Point> = moves.keys().copied().collect();
                Some(dests[rng.usize(..dests.len())])
            }
            Strategy::Minimax(engine) => engine.choose_move(board, color),
            Strategy::Mcts(engine) => engine.choose_move(board, color),
            Strategy::Heatmap(heatmap) => heatmap.choose(board, color),
            Strategy::Oracle(oracle) => oracle.choose(board, color),
        }
    }
}
