use crate::movement;
use crate::occupancy::Occupancy;
use crate::types::{Color, Coord, PieceRecord};

fn pieces_of<O: Occupancy + ?Sized>(
    occ: &O,
    color: Color,
) -> impl Iterator<Item = PieceRecord> + '_ {
    occ.dimensions()
        .coords()
        .filter_map(move |c| occ.get(c))
        .filter(move |p| p.color == color)
}

/// Returns `true` if `coord` is attacked by any piece of color `color`
pub fn is_cell_attacked<O: Occupancy + ?Sized>(occ: &O, coord: Coord, color: Color) -> bool {
    pieces_of(occ, color).any(|p| movement::attacks(&p, coord, occ))
}

/// Returns the positions of all pieces of color `color` attacking `coord`
pub fn cell_attackers<O: Occupancy + ?Sized>(occ: &O, coord: Coord, color: Color) -> Vec<Coord> {
    pieces_of(occ, color)
        .filter(|p| movement::attacks(p, coord, occ))
        .map(|p| p.coord)
        .collect()
}

/// Returns `true` if the king of color `color` is attacked
///
/// If there is no such king, returns `false`.
pub fn is_check<O: Occupancy + ?Sized>(occ: &O, color: Color) -> bool {
    match occ.king(color) {
        Some(king) => is_cell_attacked(occ, king.coord, color.inv()),
        None => false,
    }
}

/// Returns `true` if the piece standing on `coord` can be taken by some enemy piece
///
/// Returns `false` for an empty cell.
pub fn is_piece_threatened<O: Occupancy + ?Sized>(occ: &O, coord: Coord) -> bool {
    let Some(target) = occ.get(coord) else {
        return false;
    };
    pieces_of(occ, target.color.inv()).any(|p| movement::can_reach(&p, coord, occ))
}
