//! Board representation: an 8x8 grid of cell occupants.
//!
//! The board is a plain value type; `Clone` yields an independent deep copy,
//! which is what both search engines rely on when exploring hypothetical
//! futures. Mutation goes through [`Board::set`], normally only from the
//! capture-resolution code in [`crate::game`].

use std::fmt;

use crate::constants::BOARD_SIZE;

/// A disc color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Get the opposing color.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// The occupant a disc of this color produces.
    pub fn occupant(self) -> Occupant {
        match self {
            Color::Black => Occupant::Black,
            Color::White => Occupant::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// What a cell holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Occupant {
    Empty,
    Black,
    White,
}

/// A cell coordinate as (x, y), both in `0..BOARD_SIZE`.
pub type Point = (usize, usize);

/// An 8x8 Othello board.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Occupant; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board. Game setup (the 4 center discs) is done by
    /// [`crate::game::GameState::new`].
    pub fn new() -> Self {
        Self {
            cells: [[Occupant::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Occupant at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Occupant {
        self.cells[x][y]
    }

    /// Overwrite the occupant at (x, y).
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, occupant: Occupant) {
        self.cells[x][y] = occupant;
    }

    /// Count the discs of one color.
    pub fn count(&self, color: Color) -> usize {
        let target = color.occupant();
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == target)
            .count()
    }

    /// Total number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c != Occupant::Empty)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let ch = match self.get(x, y) {
                    Occupant::Black => 'X',
                    Occupant::White => 'O',
                    Occupant::Empty => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied(), 0);
        assert_eq!(board.count(Color::Black), 0);
        assert_eq!(board.count(Color::White), 0);
    }

    #[test]
    fn test_set_and_count() {
        let mut board = Board::new();
        board.set(0, 0, Occupant::Black);
        board.set(7, 7, Occupant::White);
        board.set(3, 3, Occupant::White);
        assert_eq!(board.count(Color::Black), 1);
        assert_eq!(board.count(Color::White), 2);
        assert_eq!(board.occupied(), 3);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::new();
        board.set(2, 2, Occupant::Black);
        let copy = board.clone();
        board.set(2, 2, Occupant::White);
        assert_eq!(copy.get(2, 2), Occupant::Black);
        assert_eq!(board.get(2, 2), Occupant::White);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set(0, 0, Occupant::Black);
        board.set(1, 0, Occupant::White);
        let rendered = board.to_string();
        assert!(rendered.starts_with("X O . "));
        assert_eq!(rendered.lines().count(), BOARD_SIZE);
    }
}
