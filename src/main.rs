//! Othello-Rust command line front-end.
//!
//! ## Usage
//!
//! - `othello-rust` - Show a demo
//! - `othello-rust demo` - Run the engine demo
//! - `othello-rust arena <black> <white>` - Play two strategies against
//!   each other (strategy names: random, minimax, mcts)

use anyhow::Context;
use clap::{Parser, Subcommand};

use othello_rust::board::Color;
use othello_rust::game::GameState;
use othello_rust::mcts::{dump_children, MctsEngine};
use othello_rust::minimax::MinimaxEngine;
use othello_rust::strategy::Strategy;

/// Othello-Rust: an Othello engine with minimax and MCTS strategies
#[derive(Parser)]
#[command(name = "othello-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simple demo of the engine
    Demo,
    /// Play two strategies against each other on one board
    Arena {
        /// Strategy playing Black: random, minimax, or mcts
        black: String,
        /// Strategy playing White: random, minimax, or mcts
        white: String,
        /// Seed for strategies that use randomness
        #[arg(long)]
        seed: Option<u64>,
        /// Print the board after every move
        #[arg(long)]
        verbose: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Arena {
            black,
            white,
            seed,
            verbose,
        }) => run_arena(&black, &white, seed, verbose),
        Some(Commands::Demo) | None => {
            run_demo();
            Ok(())
        }
    }
}

fn run_demo() {
    println!("Othello-Rust: Othello engine with minimax and MCTS\n");

    let game = GameState::new();
    println!("=== Opening Board ===");
    println!("{}", game.board());

    let moves = game.available_moves(Color::Black);
    println!("Legal opening moves for Black:");
    for (dest, origins) in &moves {
        println!("  ({}, {}) anchored by {} ray(s)", dest.0, dest.1, origins.len());
    }

    println!("\n=== Minimax Demo ===");
    let minimax = MinimaxEngine::new();
    if let Some((x, y)) = minimax.choose_move(game.board(), Color::Black) {
        println!("Minimax picks ({x}, {y})");
    }

    println!("\n=== MCTS Demo ===");
    let mut mcts = MctsEngine::new();
    println!("Running MCTS search...");
    if let Some(root) = mcts.search(game.board(), Color::Black) {
        dump_children(&root);
        println!("Root winrate: {:.1}%", root.win_rate() * 100.0);
    }
}

/// Play a full game between two named strategies on one live board.
fn run_arena(black: &str, white: &str, seed: Option<u64>, verbose: bool) -> anyhow::Result<()> {
    let mut black_strategy =
        Strategy::from_name(black).with_context(|| format!("Black strategy '{black}'"))?;
    let mut white_strategy =
        Strategy::from_name(white).with_context(|| format!("White strategy '{white}'"))?;
    if let Some(seed) = seed {
        black_strategy.seed(seed);
        white_strategy.seed(seed.wrapping_add(1));
    }

    let mut game = GameState::new();
    let mut color = Color::Black;
    let mut turn = 0usize;

    loop {
        let moves = game.available_moves(color);
        if moves.is_empty() {
            if game.available_moves(color.opponent()).is_empty() {
                break;
            }
            if verbose {
                println!("{color} has no move, turn passes");
            }
            color = color.opponent();
            continue;
        }

        let strategy = match color {
            Color::Black => &mut black_strategy,
            Color::White => &mut white_strategy,
        };
        let dest = strategy
            .choose_move(game.board(), color)
            .context("strategy returned no move despite legal moves")?;
        game.apply_move(color, &moves, dest);
        turn += 1;

        if verbose {
            println!("move {turn}: {color} plays ({}, {})", dest.0, dest.1);
            println!("{}", game.board());
        }
        color = color.opponent();
    }

    let black_count = game.board().count(Color::Black);
    let white_count = game.board().count(Color::White);
    println!("{}", game.board());
    println!("Final score: Black {black_count} - White {white_count}");
    match black_count.cmp(&white_count) {
        std::cmp::Ordering::Greater => println!("Black ({black}) wins"),
        std::cmp::Ordering::Less => println!("White ({white}) wins"),
        std::cmp::Ordering::Equal => println!("Draw"),
    }
    Ok(())
}
