use crate::types::{Coord, MAX_SIDE};

use arrayvec::ArrayVec;

/// Cells lying strictly between two coordinates on one line
pub type Line = ArrayVec<Coord, MAX_SIDE>;

#[inline]
fn unit(delta: i16) -> i16 {
    delta.signum()
}

/// Returns the cells strictly between `src` and `dst` if they are on the same row, column or
/// diagonal, and `None` otherwise
///
/// Equal coordinates are not considered to be on one line.
pub fn strict(src: Coord, dst: Coord) -> Option<Line> {
    let (dr, dc) = src.delta(dst);
    let aligned = (dr == 0) != (dc == 0) || (dr != 0 && dr.abs() == dc.abs());
    if !aligned {
        return None;
    }
    let (sr, sc) = (unit(dr), unit(dc));
    let steps = dr.abs().max(dc.abs());
    let mut res = Line::new();
    for i in 1..steps {
        res.push(src.shift(sr * i, sc * i)?);
    }
    Some(res)
}

#[inline]
pub fn is_bishop_valid(src: Coord, dst: Coord) -> bool {
    let (dr, dc) = src.delta(dst);
    dr != 0 && dr.abs() == dc.abs()
}

#[inline]
pub fn is_rook_valid(src: Coord, dst: Coord) -> bool {
    let (dr, dc) = src.delta(dst);
    (dr == 0) != (dc == 0)
}
