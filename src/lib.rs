//! Othello-Rust: an Othello/Reversi engine with autonomous strategies.
//!
//! The crate provides legal-move enumeration, capture resolution, and two
//! adversarial search engines (alpha-beta minimax and Monte Carlo Tree
//! Search) that explore hypothetical futures over private board copies.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry and engine parameters
//! - [`board`] - Cell occupants and the 8x8 board grid
//! - [`game`] - Move enumeration, capture resolution, live game state
//! - [`minimax`] - Depth-limited minimax with alpha-beta pruning
//! - [`mcts`] - Monte Carlo Tree Search with UCT selection
//! - [`playout`] - Random game simulation for position evaluation
//! - [`strategy`] - The closed set of move-selection strategies
//!
//! ## Example
//!
//! ```
//! use othello_rust::board::Color;
//! use othello_rust::game::GameState;
//! use othello_rust::mcts::MctsEngine;
//!
//! // Start a game and let MCTS pick Black's opening move.
//! let mut game = GameState::new();
//! let mut engine = MctsEngine::with_config(100, 1.41);
//! let moves = game.available_moves(Color::Black);
//! if let Some(dest) = engine.choose_move(game.board(), Color::Black) {
//!     game.apply_move(Color::Black, &moves, dest);
//! }
//! println!("{}", game.board());
//! ```

pub mod board;
pub mod constants;
pub mod game;
pub mod mcts;
pub mod minimax;
pub mod playout;
pub mod strategy;
