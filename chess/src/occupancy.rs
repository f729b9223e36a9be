//! Read-only view of the board used by piece rules

use crate::types::{Color, Coord, Dimensions, PieceRecord};

/// Read-only queries which piece rules are allowed to make
///
/// Rules never mutate the board. Everything they need to know about other pieces (occupancy of
/// the path, `moved` flags, position of the kings) is available through this trait, so the same
/// rule can be evaluated both on a real [`Board`](crate::board::Board) and on a [`Hypothetical`]
/// view of it.
pub trait Occupancy {
    /// Returns the size of the board
    fn dimensions(&self) -> Dimensions;

    /// Returns the piece standing on `c`, or `None` if the cell is empty or lies outside of
    /// the board
    fn get(&self, c: Coord) -> Option<PieceRecord>;

    /// Returns the king of color `c`, if there is one on the board
    fn king(&self, c: Color) -> Option<PieceRecord>;

    #[inline]
    fn is_empty_at(&self, c: Coord) -> bool {
        self.get(c).is_none()
    }
}

/// Board as it would be after moving one piece
///
/// The piece `mover` is moved to `dst`, and whatever stood on `dst` is considered captured. The
/// underlying board is not touched, so the view can be used from a shared reference and no one
/// can ever observe the intermediate state.
///
/// Only the moving piece is relocated. For castling, the rook stays in its corner, the same as
/// in the check test done before castling conditions are verified.
pub struct Hypothetical<'a, O: ?Sized> {
    base: &'a O,
    mover: PieceRecord,
    dst: Coord,
}

impl<'a, O: Occupancy + ?Sized> Hypothetical<'a, O> {
    pub fn new(base: &'a O, mover: PieceRecord, dst: Coord) -> Self {
        Self { base, mover, dst }
    }

    fn moved(&self) -> PieceRecord {
        PieceRecord {
            coord: self.dst,
            moved: true,
            ..self.mover
        }
    }
}

impl<'a, O: Occupancy + ?Sized> Occupancy for Hypothetical<'a, O> {
    #[inline]
    fn dimensions(&self) -> Dimensions {
        self.base.dimensions()
    }

    fn get(&self, c: Coord) -> Option<PieceRecord> {
        if c == self.dst {
            return Some(self.moved());
        }
        if c == self.mover.coord {
            return None;
        }
        self.base.get(c)
    }

    fn king(&self, c: Color) -> Option<PieceRecord> {
        let king = self.base.king(c)?;
        if king.id == self.mover.id {
            return Some(self.moved());
        }
        if king.coord == self.dst {
            // Captured
            return None;
        }
        Some(king)
    }
}
