//! Castling eligibility
//!
//! [`check()`] is the only place where castling conditions are verified. It is used both by the
//! king's own shape rule and by move validation on the board.

use crate::attack;
use crate::between;
use crate::geometry;
use crate::occupancy::Occupancy;
use crate::types::{CastlingSide, Coord, Piece, PieceRecord};

use thiserror::Error;

/// Reason why castling is not possible
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum CastlingError {
    /// The move is not a castling move at all
    #[error("not a castling move")]
    NotCastling,
    /// The king is not on its starting row
    #[error("king is not on its castling row")]
    NotOnCastlingRow,
    /// The king has already moved
    #[error("king has already moved")]
    KingMoved,
    /// There is no own rook in the corner
    #[error("no rook at {0}")]
    NoRook(Coord),
    /// The rook has already moved
    #[error("rook at {0} has already moved")]
    RookMoved(Coord),
    /// A cell between the king and the rook is occupied
    #[error("path is blocked at {0}")]
    PathBlocked(Coord),
    /// The king starts on, passes through or lands on an attacked cell
    #[error("cell {0} is under attack")]
    SquareAttacked(Coord),
}

/// Checks whether `king` can castle by moving to `dst`
///
/// On success, returns the castling side.
pub fn check<O: Occupancy + ?Sized>(
    occ: &O,
    king: &PieceRecord,
    dst: Coord,
) -> Result<CastlingSide, CastlingError> {
    type Error = CastlingError;

    if king.piece != Piece::King {
        return Err(Error::NotCastling);
    }
    let side = geometry::castling_side(king.coord, dst).ok_or(Error::NotCastling)?;
    let dims = occ.dimensions();
    if !dims.contains(dst) {
        return Err(Error::NotCastling);
    }
    if king.coord.row() != geometry::castling_row(king.color, dims) {
        return Err(Error::NotOnCastlingRow);
    }
    if king.moved {
        return Err(Error::KingMoved);
    }

    let corner = geometry::castling_corner(king.color, side, dims);
    match occ.get(corner) {
        Some(rook) if rook.piece == Piece::Rook && rook.color == king.color => {
            if rook.moved {
                return Err(Error::RookMoved(corner));
            }
        }
        _ => return Err(Error::NoRook(corner)),
    }

    // The king and the rook are on the same row, so they are always aligned
    let path = between::strict(king.coord, corner).unwrap_or_default();
    if let Some(c) = path.iter().find(|c| !occ.is_empty_at(**c)) {
        return Err(Error::PathBlocked(*c));
    }

    let enemy = king.color.inv();
    let transit = between::strict(king.coord, dst).unwrap_or_default();
    for c in [king.coord]
        .into_iter()
        .chain(transit.into_iter())
        .chain([dst])
    {
        if attack::is_cell_attacked(occ, c, enemy) {
            return Err(Error::SquareAttacked(c));
        }
    }

    Ok(side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::Color;

    fn castling_board() -> Board {
        Board::from_layout(
            Default::default(),
            "r...k..r/8/8/8/8/8/8/R...K..R",
        )
        .unwrap()
    }

    #[test]
    fn test_allowed() {
        let b = castling_board();
        let white = b.king(Color::White).unwrap();
        let black = b.king(Color::Black).unwrap();
        assert_eq!(check(&b, &white, Coord::new(7, 6)), Ok(CastlingSide::Right));
        assert_eq!(check(&b, &white, Coord::new(7, 2)), Ok(CastlingSide::Left));
        assert_eq!(check(&b, &black, Coord::new(0, 6)), Ok(CastlingSide::Right));
        assert_eq!(check(&b, &black, Coord::new(0, 2)), Ok(CastlingSide::Left));
    }

    #[test]
    fn test_not_castling() {
        let b = castling_board();
        let white = b.king(Color::White).unwrap();
        assert_eq!(
            check(&b, &white, Coord::new(7, 5)),
            Err(CastlingError::NotCastling)
        );
        assert_eq!(
            check(&b, &white, Coord::new(6, 6)),
            Err(CastlingError::NotCastling)
        );
        let rook = b.get(Coord::new(7, 0)).unwrap();
        assert_eq!(
            check(&b, &rook, Coord::new(7, 2)),
            Err(CastlingError::NotCastling)
        );
    }

    #[test]
    fn test_blocked() {
        let b = Board::from_layout(Default::default(), "4k3/8/8/8/8/8/8/RN2K1NR").unwrap();
        let white = b.king(Color::White).unwrap();
        assert_eq!(
            check(&b, &white, Coord::new(7, 2)),
            Err(CastlingError::PathBlocked(Coord::new(7, 1)))
        );
        assert_eq!(
            check(&b, &white, Coord::new(7, 6)),
            Err(CastlingError::PathBlocked(Coord::new(7, 6)))
        );
    }

    #[test]
    fn test_attacked() {
        // Black rook on column 5 attacks the transit cell
        let b = Board::from_layout(Default::default(), "4k3/5r2/8/8/8/8/8/R3K2R").unwrap();
        let white = b.king(Color::White).unwrap();
        assert_eq!(
            check(&b, &white, Coord::new(7, 6)),
            Err(CastlingError::SquareAttacked(Coord::new(7, 5)))
        );
        assert_eq!(check(&b, &white, Coord::new(7, 2)), Ok(CastlingSide::Left));

        // Castling out of check
        let b = Board::from_layout(Default::default(), "4k3/4r3/8/8/8/8/8/R3K2R").unwrap();
        let white = b.king(Color::White).unwrap();
        assert_eq!(
            check(&b, &white, Coord::new(7, 2)),
            Err(CastlingError::SquareAttacked(Coord::new(7, 4)))
        );
    }

    #[test]
    fn test_no_rook() {
        let b = Board::from_layout(Default::default(), "4k3/8/8/8/8/8/8/r3K2B").unwrap();
        let white = b.king(Color::White).unwrap();
        assert_eq!(
            check(&b, &white, Coord::new(7, 2)),
            Err(CastlingError::NoRook(Coord::new(7, 0)))
        );
        assert_eq!(
            check(&b, &white, Coord::new(7, 6)),
            Err(CastlingError::NoRook(Coord::new(7, 7)))
        );
    }

    #[test]
    fn test_not_on_castling_row() {
        let b = Board::from_layout(Default::default(), "4k3/8/8/8/R3K2R/8/8/8").unwrap();
        let white = b.king(Color::White).unwrap();
        assert_eq!(
            check(&b, &white, Coord::new(4, 6)),
            Err(CastlingError::NotOnCastlingRow)
        );
    }
}
