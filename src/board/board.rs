//! Board structure shared between the game loop and the engine

use std::fmt;

use thiserror::Error;

use super::bitboard::{Bitboard, BitboardIter};
use super::{Pos, Stone, BOARD_SIZE};

/// Rejected move applied through [`Board::make_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },
    #[error("position {0} is already occupied")]
    Occupied(Pos),
    #[error("cannot place an empty stone")]
    EmptyStone,
}

/// Game board, one bitboard per side.
///
/// At most one stone occupies a cell: `place_stone` and `remove_stone`
/// keep the two bitboards disjoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone without validation.
    /// Scratch placements during search go through here; use `make_move` for game moves.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => {
                self.white.clear(pos);
                self.black.set(pos);
            }
            Stone::White => {
                self.black.clear(pos);
                self.white.set(pos);
            }
            Stone::Empty => self.remove_stone(pos),
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Validated placement for the game loop applying a chosen move.
    pub fn make_move(&mut self, row: i32, col: i32, stone: Stone) -> Result<Pos, MoveError> {
        if stone == Stone::Empty {
            return Err(MoveError::EmptyStone);
        }
        if !Pos::is_valid(row, col) {
            return Err(MoveError::OutOfBounds { row, col });
        }
        let pos = Pos::new(row as u8, col as u8);
        if !self.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }
        self.place_stone(pos, stone);
        Ok(pos)
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// All occupied cells in row-major order
    #[inline]
    pub fn occupied(&self) -> BitboardIter {
        self.black.union(&self.white).iter_ones()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {c}")?;
        }
        writeln!(f)?;

        for r in 0..BOARD_SIZE {
            write!(f, "{r:2}")?;
            for c in 0..BOARD_SIZE {
                let pos = Pos::new(r as u8, c as u8);
                write!(f, " {}", self.get(pos).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
