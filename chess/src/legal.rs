use crate::attack;
use crate::board::Board;
use crate::castling::{self, CastlingError};
use crate::config::KingCapture;
use crate::geometry;
use crate::movement;
use crate::occupancy::Hypothetical;
use crate::types::{CastlingSide, Coord, Piece, PieceRecord};

use thiserror::Error;

/// Reason why a move is rejected
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum MoveError {
    /// Coordinate lies outside of the board
    #[error("cell {0} is out of bounds")]
    OutOfBounds(Coord),
    /// Source and destination are the same
    #[error("source and destination are the same")]
    SameSquare,
    /// No piece on the source cell
    #[error("no piece at {0}")]
    EmptySource(Coord),
    /// The piece belongs to the side which is not to move
    #[error("it is not the turn of the piece at {0}")]
    WrongTurn(Coord),
    /// Destination holds a piece of the same side
    #[error("own piece at {0}")]
    OwnPieceAtDestination(Coord),
    /// Destination holds the opponent's king, and king capture is forbidden
    #[error("cannot capture the king at {0}")]
    KingCapture(Coord),
    /// The piece cannot move this way
    #[error("piece cannot reach {0}")]
    NotReachable(Coord),
    /// The move leaves the own king under attack
    #[error("move exposes the king")]
    ExposesKing,
    /// Castling conditions are not met
    #[error("cannot castle: {0}")]
    Castling(#[from] CastlingError),
}

/// Validated move, ready to be applied
#[derive(Debug, Copy, Clone)]
pub(crate) struct Verdict {
    pub mover: PieceRecord,
    pub castling: Option<CastlingSide>,
}

fn check_bounds(b: &Board, src: Coord, dst: Coord) -> Result<(), MoveError> {
    let dims = b.dimensions();
    for c in [src, dst] {
        if !dims.contains(c) {
            return Err(MoveError::OutOfBounds(c));
        }
    }
    Ok(())
}

pub(crate) fn validate(b: &Board, src: Coord, dst: Coord) -> Result<Verdict, MoveError> {
    check_bounds(b, src, dst)?;
    if src == dst {
        return Err(MoveError::SameSquare);
    }
    let mover = b.get(src).ok_or(MoveError::EmptySource(src))?;

    if let Some(target) = b.get(dst) {
        if target.color == mover.color {
            return Err(MoveError::OwnPieceAtDestination(dst));
        }
        if target.piece == Piece::King && b.config().king_capture == KingCapture::Forbid {
            return Err(MoveError::KingCapture(dst));
        }
    }

    let castling = match geometry::castling_side(src, dst) {
        Some(_) if mover.piece == Piece::King => Some(castling::check(b, &mover, dst)?),
        _ => {
            if !movement::can_reach(&mover, dst, b) {
                return Err(MoveError::NotReachable(dst));
            }
            None
        }
    };

    if attack::is_check(&Hypothetical::new(b, mover, dst), mover.color) {
        return Err(MoveError::ExposesKing);
    }

    Ok(Verdict { mover, castling })
}

pub(crate) fn validate_turn(b: &Board, src: Coord, dst: Coord) -> Result<Verdict, MoveError> {
    check_bounds(b, src, dst)?;
    let mover = b.get(src).ok_or(MoveError::EmptySource(src))?;
    if mover.color != b.side() {
        return Err(MoveError::WrongTurn(src));
    }
    validate(b, src, dst)
}
