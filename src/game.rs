//! Core game logic: move enumeration, capture resolution, and the live
//! game state.
//!
//! Legal moves are found by ray-walking: from every empty cell, each of the
//! 8 directions is scanned outward while it runs over enemy discs; if the
//! run is at least one disc long and ends on an allied disc, the empty cell
//! is a legal destination and that allied disc is one of its origins.
//! Capture resolution flips everything between each origin and the
//! destination, inclusive.
//!
//! Two flavors of capture application exist:
//! - [`GameState::apply_move`] mutates the live board and keeps both sides'
//!   owned-cell sets in sync. Called exactly once per turn.
//! - [`simulate_capture`] mutates a plain board (normally a private copy)
//!   with no side bookkeeping. This is what the search engines use.

use std::collections::{BTreeMap, BTreeSet};

use crate::board::{Board, Color, Occupant, Point};
use crate::constants::{BOARD_SIZE, DIRECTIONS};

/// Legal moves for one color: each destination mapped to the origins that
/// anchor a capturing ray toward it.
///
/// The `BTreeMap` makes enumeration order deterministic (ascending by
/// coordinate); every "first move wins ties" rule in the engines refers to
/// this order. An empty map means the turn must be skipped, not an error.
pub type MoveMap = BTreeMap<Point, Vec<Point>>;

/// Enumerate the legal moves for `color` on `board`.
pub fn available_moves(board: &Board, color: Color) -> MoveMap {
    let mut moves = MoveMap::new();
    for x in 0..BOARD_SIZE {
        for y in 0..BOARD_SIZE {
            if board.get(x, y) != Occupant::Empty {
                continue;
            }
            for &dir in &DIRECTIONS {
                if let Some(origin) = ray_origin(board, (x, y), dir, color) {
                    moves.entry((x, y)).or_default().push(origin);
                }
            }
        }
    }
    moves
}

/// Walk from `start` in direction `(dx, dy)` looking for a capturing ray.
///
/// Returns the allied cell terminating an unbroken run of at least one enemy
/// disc, or `None` if the ray hits an empty cell, runs off the board, or
/// reaches an ally with no enemies in between.
fn ray_origin(board: &Board, start: Point, (dx, dy): (isize, isize), color: Color) -> Option<Point> {
    let ally = color.occupant();
    let enemy = color.opponent().occupant();

    let mut x = start.0 as isize + dx;
    let mut y = start.1 as isize + dy;
    let mut seen_enemy = false;

    while (0..BOARD_SIZE as isize).contains(&x) && (0..BOARD_SIZE as isize).contains(&y) {
        let occupant = board.get(x as usize, y as usize);
        if occupant == enemy {
            seen_enemy = true;
            x += dx;
            y += dy;
        } else if occupant == ally {
            return seen_enemy.then_some((x as usize, y as usize));
        } else {
            return None;
        }
    }
    None
}

/// Look up the origins for `dest`, panicking on an illegal destination.
///
/// Requesting a destination that is not a legal move is a caller bug, not a
/// recoverable condition; it is asserted here so it cannot silently corrupt
/// board state.
fn origins_for<'a>(moves: &'a MoveMap, dest: Point) -> &'a [Point] {
    match moves.get(&dest) {
        Some(origins) => origins,
        None => panic!("destination ({}, {}) is not a legal move", dest.0, dest.1),
    }
}

/// Apply the capture for `dest` to `board` without any side bookkeeping.
///
/// The board is typically a private copy owned by a search engine. Every
/// cell between each origin and the destination, inclusive, becomes `color`.
///
/// # Panics
/// If `dest` is not a key of `moves`.
pub fn simulate_capture(board: &mut Board, moves: &MoveMap, dest: Point, color: Color) {
    let occupant = color.occupant();
    board.set(dest.0, dest.1, occupant);
    for &origin in origins_for(moves, dest) {
        for (x, y) in line_between(origin, dest) {
            board.set(x, y, occupant);
        }
    }
}

/// Iterate the cells from `origin` to `dest` inclusive along their shared
/// row, column, or diagonal.
fn line_between(origin: Point, dest: Point) -> impl Iterator<Item = Point> {
    let dx = (dest.0 as isize - origin.0 as isize).signum();
    let dy = (dest.1 as isize - origin.1 as isize).signum();
    let steps = (dest.0 as isize - origin.0 as isize)
        .abs()
        .max((dest.1 as isize - origin.1 as isize).abs());
    (0..=steps).map(move |i| {
        (
            (origin.0 as isize + i * dx) as usize,
            (origin.1 as isize + i * dy) as usize,
        )
    })
}

/// One player's color and the set of cells it currently owns.
///
/// The owned set always mirrors "cells whose occupant equals this color" on
/// the live board; it is updated transactionally with every flip.
#[derive(Clone, Debug)]
pub struct Side {
    color: Color,
    owned: BTreeSet<Point>,
}

impl Side {
    fn new(color: Color) -> Self {
        Self {
            color,
            owned: BTreeSet::new(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn owned(&self) -> &BTreeSet<Point> {
        &self.owned
    }
}

/// The live game: the board plus both sides.
///
/// Created once at game start with the 4 center discs seeded, thereafter
/// mutated only through [`GameState::apply_move`].
pub struct GameState {
    board: Board,
    black: Side,
    white: Side,
}

impl GameState {
    /// Start a new game with the canonical center arrangement:
    /// White at (3,3) and (4,4), Black at (3,4) and (4,3).
    pub fn new() -> Self {
        let mut state = Self {
            board: Board::new(),
            black: Side::new(Color::Black),
            white: Side::new(Color::White),
        };
        state.claim(Color::White, (3, 3));
        state.claim(Color::White, (4, 4));
        state.claim(Color::Black, (3, 4));
        state.claim(Color::Black, (4, 3));
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side(&self, color: Color) -> &Side {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }

    /// Legal moves for `color` on the live board.
    pub fn available_moves(&self, color: Color) -> MoveMap {
        available_moves(&self.board, color)
    }

    /// Neither side can move.
    pub fn is_over(&self) -> bool {
        self.available_moves(Color::Black).is_empty()
            && self.available_moves(Color::White).is_empty()
    }

    /// Apply the real capture for `dest` on behalf of `color`, flipping the
    /// destination and every ray anchored on it, and updating both sides'
    /// owned sets.
    ///
    /// # Panics
    /// If `dest` is not a key of `moves`.
    pub fn apply_move(&mut self, color: Color, moves: &MoveMap, dest: Point) {
        self.claim(color, dest);
        // Collect first: claiming borrows self mutably.
        let flips: Vec<Point> = origins_for(moves, dest)
            .iter()
            .flat_map(|&origin| line_between(origin, dest))
            .collect();
        for pt in flips {
            self.claim(color, pt);
        }
    }

    /// Claim a single cell for `color`: remove it from the opponent's owned
    /// set if held, set the occupant, and add it to the acting side's set.
    /// Re-claiming an already-owned cell is a no-op.
    fn claim(&mut self, color: Color, pt: Point) {
        let (acting, opposing) = match color {
            Color::Black => (&mut self.black, &mut self.white),
            Color::White => (&mut self.white, &mut self.black),
        };
        opposing.owned.remove(&pt);
        acting.owned.insert(pt);
        self.board.set(pt.0, pt.1, color.occupant());
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Neither color has a legal move on `board`.
pub fn is_game_over(board: &Board) -> bool {
    available_moves(board, Color::Black).is_empty()
        && available_moves(board, Color::White).is_empty()
}
