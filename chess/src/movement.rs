//! Shape legality of piece moves
//!
//! Each piece kind has its own zero-sized rule type implementing [`Movement`]. The functions
//! [`can_reach()`] and [`attacks()`] dispatch on the kind of the given piece.
//!
//! Shape legality means that the movement pattern and the occupancy of the path allow the piece
//! to get to the destination. Whether the move exposes the own king is not considered here.

use crate::between;
use crate::castling;
use crate::geometry;
use crate::occupancy::Occupancy;
use crate::types::{Coord, Piece, PieceRecord};

pub trait Movement {
    /// Returns `true` if `p` can move to `dst`
    ///
    /// The caller guarantees that `dst` lies on the board and differs from the piece's own cell.
    fn can_reach<O: Occupancy + ?Sized>(p: &PieceRecord, dst: Coord, occ: &O) -> bool;

    /// Returns `true` if `p` attacks `dst`
    ///
    /// Same preconditions as for [`Movement::can_reach()`].
    #[inline]
    fn attacks<O: Occupancy + ?Sized>(p: &PieceRecord, dst: Coord, occ: &O) -> bool {
        Self::can_reach(p, dst, occ)
    }
}

/// Returns `true` if `p` may finish its move on `dst`, i.e. the cell is empty or holds an enemy
#[inline]
fn can_enter<O: Occupancy + ?Sized>(p: &PieceRecord, dst: Coord, occ: &O) -> bool {
    match occ.get(dst) {
        Some(other) => other.color != p.color,
        None => true,
    }
}

#[inline]
fn is_path_clear<O: Occupancy + ?Sized>(src: Coord, dst: Coord, occ: &O) -> bool {
    match between::strict(src, dst) {
        Some(line) => line.iter().all(|c| occ.is_empty_at(*c)),
        None => false,
    }
}

pub struct Pawn;
pub struct King;
pub struct Knight;
pub struct Bishop;
pub struct Rook;
pub struct Queen;

impl Movement for Pawn {
    fn can_reach<O: Occupancy + ?Sized>(p: &PieceRecord, dst: Coord, occ: &O) -> bool {
        let forward = geometry::pawn_forward_delta(p.color);
        let (dr, dc) = p.coord.delta(dst);

        if dc == 0 && dr == 2 * forward {
            if p.coord.row() != geometry::pawn_start_row(p.color, occ.dimensions()) {
                return false;
            }
            return match p.coord.shift(forward, 0) {
                Some(mid) => occ.is_empty_at(mid) && occ.is_empty_at(dst),
                None => false,
            };
        }

        if dc == 0 && dr == forward {
            return occ.is_empty_at(dst);
        }

        if dc.abs() == 1 && dr == forward {
            return matches!(occ.get(dst), Some(other) if other.color != p.color);
        }

        false
    }
}

impl Movement for King {
    fn can_reach<O: Occupancy + ?Sized>(p: &PieceRecord, dst: Coord, occ: &O) -> bool {
        if Self::attacks(p, dst, occ) {
            return true;
        }
        geometry::castling_side(p.coord, dst).is_some() && castling::check(occ, p, dst).is_ok()
    }

    // Castling is never an attack: its destination is always empty. Evaluating it here would
    // also make attack scans recurse through the opponent's king.
    fn attacks<O: Occupancy + ?Sized>(p: &PieceRecord, dst: Coord, occ: &O) -> bool {
        let (dr, dc) = p.coord.delta(dst);
        dr.abs() <= 1 && dc.abs() <= 1 && can_enter(p, dst, occ)
    }
}

impl Movement for Knight {
    fn can_reach<O: Occupancy + ?Sized>(p: &PieceRecord, dst: Coord, occ: &O) -> bool {
        let (dr, dc) = p.coord.delta(dst);
        matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1)) && can_enter(p, dst, occ)
    }
}

impl Movement for Bishop {
    fn can_reach<O: Occupancy + ?Sized>(p: &PieceRecord, dst: Coord, occ: &O) -> bool {
        between::is_bishop_valid(p.coord, dst)
            && is_path_clear(p.coord, dst, occ)
            && can_enter(p, dst, occ)
    }
}

impl Movement for Rook {
    fn can_reach<O: Occupancy + ?Sized>(p: &PieceRecord, dst: Coord, occ: &O) -> bool {
        between::is_rook_valid(p.coord, dst)
            && is_path_clear(p.coord, dst, occ)
            && can_enter(p, dst, occ)
    }
}

impl Movement for Queen {
    fn can_reach<O: Occupancy + ?Sized>(p: &PieceRecord, dst: Coord, occ: &O) -> bool {
        Bishop::can_reach(p, dst, occ) || Rook::can_reach(p, dst, occ)
    }
}

#[inline]
fn is_sane_target<O: Occupancy + ?Sized>(p: &PieceRecord, dst: Coord, occ: &O) -> bool {
    dst != p.coord && occ.dimensions().contains(dst)
}

/// Returns `true` if piece `p` can legally reach `dst` by shape rules, including castling
pub fn can_reach<O: Occupancy + ?Sized>(p: &PieceRecord, dst: Coord, occ: &O) -> bool {
    if !is_sane_target(p, dst, occ) {
        return false;
    }
    match p.piece {
        Piece::Pawn => Pawn::can_reach(p, dst, occ),
        Piece::King => King::can_reach(p, dst, occ),
        Piece::Knight => Knight::can_reach(p, dst, occ),
        Piece::Bishop => Bishop::can_reach(p, dst, occ),
        Piece::Rook => Rook::can_reach(p, dst, occ),
        Piece::Queen => Queen::can_reach(p, dst, occ),
    }
}

/// Returns `true` if piece `p` attacks `dst`
///
/// This is the same as [`can_reach()`], except that the king doesn't attack through castling.
pub fn attacks<O: Occupancy + ?Sized>(p: &PieceRecord, dst: Coord, occ: &O) -> bool {
    if !is_sane_target(p, dst, occ) {
        return false;
    }
    match p.piece {
        Piece::Pawn => Pawn::attacks(p, dst, occ),
        Piece::King => King::attacks(p, dst, occ),
        Piece::Knight => Knight::attacks(p, dst, occ),
        Piece::Bishop => Bishop::attacks(p, dst, occ),
        Piece::Rook => Rook::attacks(p, dst, occ),
        Piece::Queen => Queen::attacks(p, dst, occ),
    }
}
