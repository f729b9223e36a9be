//! Core types
//!
//! Most of them come from `gridchess_base` and are re-exported here. This module adds the types
//! that describe pieces living on a [`Board`](crate::board::Board).

pub use gridchess_base::types::*;

use std::fmt;

/// Stable handle of a piece owned by a [`Board`](crate::board::Board)
///
/// Handles are never reused: after a piece is captured or replaced, its handle stays retired for
/// the whole lifetime of the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(pub(crate) usize);

impl PieceId {
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// Piece standing on the board
///
/// The board hands out copies of its records, so changing a returned record doesn't affect the
/// board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PieceRecord {
    /// Handle of the piece
    pub id: PieceId,
    /// Side owning the piece
    pub color: Color,
    /// Piece kind
    pub piece: Piece,
    /// Current position
    pub coord: Coord,
    /// Whether the piece has made at least one move
    pub moved: bool,
}

impl PieceRecord {
    #[inline]
    pub const fn cell(&self) -> Cell {
        Cell::from_parts(self.color, self.piece)
    }

    /// Returns the symbol representing the piece
    #[inline]
    pub fn glyph(&self) -> char {
        self.cell().as_utf8_char()
    }
}

impl fmt::Display for PieceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}@{}", self.cell(), self.coord)
    }
}
