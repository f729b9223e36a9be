use crate::types::{CastlingSide, Color, Coord, Dimensions};

/// Row on which the pieces of color `c` start, and on which castling happens
pub const fn castling_row(c: Color, dims: Dimensions) -> u8 {
    match c {
        Color::White => dims.rows() - 1,
        Color::Black => 0,
    }
}

/// Column of the rook taking part in castling towards `s`
pub const fn castling_rook_column(s: CastlingSide, dims: Dimensions) -> u8 {
    match s {
        CastlingSide::Left => 0,
        CastlingSide::Right => dims.columns() - 1,
    }
}

/// Corner cell which must hold the rook for castling of color `c` towards `s`
pub const fn castling_corner(c: Color, s: CastlingSide, dims: Dimensions) -> Coord {
    Coord::new(castling_row(c, dims), castling_rook_column(s, dims))
}

/// Returns the castling side if a king moving from `src` to `dst` makes a castling-shaped move,
/// i.e. it stays on the same row and travels exactly two columns
pub fn castling_side(src: Coord, dst: Coord) -> Option<CastlingSide> {
    if src.row() != dst.row() {
        return None;
    }
    match i16::from(dst.column()) - i16::from(src.column()) {
        2 => Some(CastlingSide::Right),
        -2 => Some(CastlingSide::Left),
        _ => None,
    }
}

/// Column where the rook lands after castling towards `s`, given the king's destination column
pub const fn castling_rook_dst_column(s: CastlingSide, king_dst: u8) -> u8 {
    match s {
        CastlingSide::Left => king_dst + 1,
        CastlingSide::Right => king_dst - 1,
    }
}

/// Row delta of a single pawn step
pub const fn pawn_forward_delta(c: Color) -> i16 {
    match c {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Row from which the pawns of color `c` may make a double step
pub const fn pawn_start_row(c: Color, dims: Dimensions) -> u8 {
    match c {
        Color::White => dims.rows().saturating_sub(2),
        Color::Black => 1,
    }
}
