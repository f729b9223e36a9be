//! Board and related things

use crate::attack;
use crate::config::Config;
use crate::geometry;
use crate::legal::{self, MoveError};
use crate::occupancy::Occupancy;
use crate::types::{
    CastlingRights, CastlingSide, Cell, Color, Coord, Dimensions, Piece, PieceId, PieceRecord,
};

use std::fmt::{self, Display};

use log::{debug, trace};
use thiserror::Error;

/// Error placing a piece on the board
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum PlaceError {
    /// Coordinate lies outside of the board
    #[error("cell {0} is out of bounds")]
    OutOfBounds(Coord),
}

/// Error parsing a board layout
///
/// See [`Board::from_layout()`] for the format.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum LayoutParseError {
    /// Row contains more cells than the board has columns
    #[error("too many items in row {0}")]
    RowOverflow(u8),
    /// Row contains less cells than the board has columns
    #[error("not enough items in row {0}")]
    RowUnderflow(u8),
    /// Too many rows
    #[error("too many rows")]
    Overflow,
    /// Not enough rows
    #[error("not enough rows")]
    Underflow,
    /// Unexpected character
    #[error("unexpected char {0:?}")]
    UnexpectedChar(char),
}

/// Outcome of a successfully applied move
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// The moved piece, as it stands after the move
    pub piece: PieceRecord,
    /// The piece taken by the move, if any
    pub captured: Option<PieceRecord>,
    /// Castling side, if the move is castling
    pub castling: Option<CastlingSide>,
}

/// Game board
///
/// The board owns all the pieces. Each piece gets a [`PieceId`] when it's created, and the board
/// hands out copies of the piece records, never references into its own storage. Pieces which
/// were captured or replaced have their handles retired.
///
/// The only mutating operation exposed for gameplay is [`Board::apply_move()`] (or its
/// counterpart [`Board::try_apply_move()`]), which re-validates the move on each call. Queries
/// never mutate the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: Config,
    cells: Vec<Option<PieceId>>,
    arena: Vec<Option<PieceRecord>>,
    side: Color,
    castling: CastlingRights,
    kings: [Option<PieceId>; 2],
}

const BACK_ROW: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Board {
    /// Creates an empty board with the given configuration
    pub fn new(config: Config) -> Board {
        Board {
            config,
            cells: vec![None; config.dimensions.len()],
            arena: Vec::new(),
            side: config.first_side,
            castling: CastlingRights::FULL,
            kings: [None; 2],
        }
    }

    /// Creates a standard 8x8 board with both armies in their initial positions
    pub fn initial() -> Board {
        let mut b = Board::new(Config::STANDARD);
        for color in [Color::White, Color::Black] {
            let back = geometry::castling_row(color, b.dimensions());
            let front = geometry::pawn_start_row(color, b.dimensions());
            for (column, piece) in (0_u8..).zip(BACK_ROW) {
                b.place(color, piece, Coord::new(back, column));
                b.place(color, Piece::Pawn, Coord::new(front, column));
            }
        }
        b.selftest();
        b
    }

    /// Creates a board from a textual layout
    ///
    /// The layout lists the rows from row 0 onwards, separated by `/`. Each row consists of
    /// piece letters (uppercase for White, lowercase for Black, as in [`Cell::from_char()`]),
    /// dots denoting single empty cells, and decimal numbers denoting runs of empty cells.
    /// The layout must cover the board dimensions from `config` exactly.
    ///
    /// All the pieces are considered unmoved, and all castling rights are present.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridchess::{Board, Config, Coord, Piece};
    /// #
    /// let config = Config::new(3, 10).unwrap();
    /// let b = Board::from_layout(config, "k9/10/.R7K").unwrap();
    /// assert_eq!(b.get(Coord::new(2, 1)).unwrap().piece, Piece::Rook);
    /// assert_eq!(b.len(), 3);
    /// ```
    pub fn from_layout(config: Config, layout: &str) -> Result<Board, LayoutParseError> {
        let cells = parse_layout(config.dimensions, layout)?;
        let mut b = Board::new(config);
        for (coord, cell) in config.dimensions.coords().zip(cells) {
            if let (Some(color), Some(piece)) = (cell.color(), cell.piece()) {
                b.place(color, piece, coord);
            }
        }
        b.selftest();
        Ok(b)
    }

    /// Places a new piece on the board
    ///
    /// If the cell is already occupied, its piece is removed first. If the new piece is a king,
    /// it becomes the king of its side, even if the side already has one.
    pub fn create_piece(
        &mut self,
        color: Color,
        piece: Piece,
        coord: Coord,
    ) -> Result<PieceId, PlaceError> {
        if !self.dimensions().contains(coord) {
            return Err(PlaceError::OutOfBounds(coord));
        }
        let id = self.place(color, piece, coord);
        self.selftest();
        Ok(id)
    }

    fn place(&mut self, color: Color, piece: Piece, coord: Coord) -> PieceId {
        if let Some(old) = self.capture(coord) {
            debug!("replacing {} with a new piece", old);
        }
        let id = PieceId(self.arena.len());
        self.arena.push(Some(PieceRecord {
            id,
            color,
            piece,
            coord,
            moved: false,
        }));
        self.cells[self.config.dimensions.index(coord)] = Some(id);
        if piece == Piece::King {
            self.kings[color.index()] = Some(id);
        }
        id
    }

    /// Removes the piece standing on `coord` and retires its handle
    ///
    /// Returns the removed piece, or `None` if the cell is empty or lies outside of the board.
    pub fn capture(&mut self, coord: Coord) -> Option<PieceRecord> {
        if !self.dimensions().contains(coord) {
            return None;
        }
        let id = self.cells[self.config.dimensions.index(coord)].take()?;
        let record = self.arena[id.index()].take()?;
        let king = &mut self.kings[record.color.index()];
        if *king == Some(id) {
            *king = None;
        }
        self.selftest();
        Some(record)
    }

    fn relocate(&mut self, id: PieceId, dst: Coord) -> Option<PieceRecord> {
        let dims = self.config.dimensions;
        let record = self.arena[id.index()].as_mut()?;
        self.cells[dims.index(record.coord)] = None;
        self.cells[dims.index(dst)] = Some(id);
        record.coord = dst;
        record.moved = true;
        Some(*record)
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.config.dimensions
    }

    /// Returns the side to move
    #[inline]
    pub fn side(&self) -> Color {
        self.side
    }

    /// Returns the castling rights
    ///
    /// Rights only record which corners were touched. Whether castling is possible is decided
    /// by the `moved` flags of the king and the rook, see [`crate::castling::check()`].
    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    /// Returns the piece standing on `c`
    ///
    /// Returns `None` if the cell is empty or lies outside of the board.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<PieceRecord> {
        if !self.dimensions().contains(c) {
            return None;
        }
        self.cells[self.config.dimensions.index(c)].and_then(|id| self.piece(id))
    }

    /// Returns the piece with handle `id`, or `None` if the handle is retired
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<PieceRecord> {
        self.arena.get(id.index()).copied().flatten()
    }

    /// Returns the king of color `c`
    #[inline]
    pub fn king(&self, c: Color) -> Option<PieceRecord> {
        self.kings[c.index()].and_then(|id| self.piece(id))
    }

    /// Iterates over all the pieces on the board, in the order of their creation
    pub fn pieces(&self) -> impl Iterator<Item = PieceRecord> + '_ {
        self.arena.iter().flatten().copied()
    }

    /// Returns the number of pieces on the board
    pub fn len(&self) -> usize {
        self.pieces().count()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces().next().is_none()
    }

    /// Checks whether the piece on `src` may move to `dst`
    ///
    /// The side to move is not taken into account here. [`Board::try_apply_move()`] checks it
    /// in addition to this.
    pub fn validate_move(&self, src: Coord, dst: Coord) -> Result<(), MoveError> {
        legal::validate(self, src, dst).map(|_| ())
    }

    /// Returns `true` if the piece on `src` may move to `dst`
    ///
    /// See [`Board::validate_move()`] for details.
    #[inline]
    pub fn is_legal_move(&self, src: Coord, dst: Coord) -> bool {
        self.validate_move(src, dst).is_ok()
    }

    /// Makes the move from `src` to `dst`
    ///
    /// The move is fully validated first, including the side to move. If it is rejected, the
    /// board is left unchanged.
    pub fn try_apply_move(&mut self, src: Coord, dst: Coord) -> Result<MoveReport, MoveError> {
        let verdict = legal::validate_turn(self, src, dst).map_err(|e| {
            debug!("rejected move {} -> {}: {}", src, dst, e);
            e
        })?;
        let mover = verdict.mover;

        let captured = self.capture(dst);
        let piece = self.relocate(mover.id, dst).unwrap_or(mover);
        if let Some(side) = verdict.castling {
            let corner = geometry::castling_corner(mover.color, side, self.dimensions());
            let rook_dst = Coord::new(
                dst.row(),
                geometry::castling_rook_dst_column(side, dst.column()),
            );
            if let Some(rook) = self.get(corner) {
                self.relocate(rook.id, rook_dst);
                trace!("castling: rook {} -> {}", corner, rook_dst);
            }
        }
        self.update_castling(&mover, dst);
        self.side = self.side.inv();
        trace!("applied move {} -> {}", src, dst);
        self.selftest();

        Ok(MoveReport {
            piece,
            captured,
            castling: verdict.castling,
        })
    }

    /// Makes the move from `src` to `dst`, returning `true` on success
    ///
    /// See [`Board::try_apply_move()`] for details.
    #[inline]
    pub fn apply_move(&mut self, src: Coord, dst: Coord) -> bool {
        self.try_apply_move(src, dst).is_ok()
    }

    fn update_castling(&mut self, mover: &PieceRecord, dst: Coord) {
        if mover.piece == Piece::King {
            self.castling.unset_color(mover.color);
        }
        let dims = self.dimensions();
        for color in [Color::White, Color::Black] {
            for side in CastlingSide::iter() {
                let corner = geometry::castling_corner(color, side, dims);
                if corner == mover.coord || corner == dst {
                    self.castling.unset(color, side);
                }
            }
        }
    }

    /// Returns `true` if the king of color `c` is attacked
    ///
    /// If the side has no king, returns `false`.
    pub fn is_king_in_check(&self, c: Color) -> bool {
        attack::is_check(self, c)
    }

    /// Returns `true` if some piece of the opponent of `c` attacks `coord`
    pub fn is_square_under_attack(&self, coord: Coord, c: Color) -> bool {
        attack::is_cell_attacked(self, coord, c.inv())
    }

    /// Returns `true` if the piece standing on `coord` can be taken by some opponent's piece
    ///
    /// Only the movement rules of the attacking pieces are considered. Returns `false` if the
    /// cell is empty.
    pub fn is_piece_under_threat(&self, coord: Coord) -> bool {
        attack::is_piece_threatened(self, coord)
    }

    /// Returns the positions of all the pieces of the opponent of `c` which attack `coord`
    pub fn attackers(&self, coord: Coord, c: Color) -> Vec<Coord> {
        attack::cell_attackers(self, coord, c.inv())
    }

    /// Checks the internal invariants of the board
    ///
    /// Each cell must refer to a live piece which knows that it stands on this cell, each live
    /// piece must be referred to by exactly one cell, and the king handles must point to live
    /// kings of the right color.
    pub fn is_consistent(&self) -> bool {
        let dims = self.dimensions();
        if self.cells.len() != dims.len() {
            return false;
        }
        for (idx, id) in self.cells.iter().enumerate() {
            let Some(id) = id else {
                continue;
            };
            match self.piece(*id) {
                Some(p) if dims.contains(p.coord) && dims.index(p.coord) == idx => {}
                _ => return false,
            }
        }
        let occupied = self.cells.iter().flatten().count();
        if occupied != self.len() {
            return false;
        }
        for color in [Color::White, Color::Black] {
            if let Some(id) = self.kings[color.index()] {
                match self.piece(id) {
                    Some(p) if p.piece == Piece::King && p.color == color => {}
                    _ => return false,
                }
            }
        }
        true
    }

    #[inline]
    fn selftest(&self) {
        #[cfg(feature = "selftest")]
        assert!(self.is_consistent(), "board invariants are broken");
    }

    /// Wraps the board to allow pretty-printing with the given style
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridchess::{Board, Config, PrettyStyle};
    /// #
    /// let b = Board::from_layout(Config::new(3, 3).unwrap(), "k2/3/.RK").unwrap();
    /// let res = r#"
    ///   012
    ///   ---
    /// 0|k..|
    /// 1|...|
    /// 2|.RK|
    ///   ---
    /// "#;
    /// assert_eq!(b.pretty(PrettyStyle::Ascii).to_string(), &res[1..]);
    /// ```
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty { board: self, style }
    }

    /// Returns the contents of all the cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.dimensions().coords().map(|c| match self.get(c) {
            Some(p) => p.cell(),
            None => Cell::EMPTY,
        })
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new(Config::default())
    }
}

impl Occupancy for Board {
    #[inline]
    fn dimensions(&self) -> Dimensions {
        Board::dimensions(self)
    }

    #[inline]
    fn get(&self, c: Coord) -> Option<PieceRecord> {
        Board::get(self, c)
    }

    #[inline]
    fn king(&self, c: Color) -> Option<PieceRecord> {
        Board::king(self, c)
    }
}

fn parse_layout(dims: Dimensions, s: &str) -> Result<Vec<Cell>, LayoutParseError> {
    type Error = LayoutParseError;

    let mut cells = Vec::with_capacity(dims.len());
    let mut rows = s.split('/');
    for row in 0..dims.rows() {
        let line = rows.next().ok_or(Error::Underflow)?;
        let start = cells.len();
        let mut run = 0_usize;
        for ch in line.chars() {
            if let Some(d) = ch.to_digit(10) {
                run = run * 10 + d as usize;
                if run > usize::from(dims.columns()) {
                    return Err(Error::RowOverflow(row));
                }
                continue;
            }
            cells.extend((0..run).map(|_| Cell::EMPTY));
            run = 0;
            let cell = Cell::from_char(ch).ok_or(Error::UnexpectedChar(ch))?;
            cells.push(cell);
            if cells.len() - start > usize::from(dims.columns()) {
                return Err(Error::RowOverflow(row));
            }
        }
        cells.extend((0..run).map(|_| Cell::EMPTY));
        match (cells.len() - start).cmp(&usize::from(dims.columns())) {
            std::cmp::Ordering::Less => return Err(Error::RowUnderflow(row)),
            std::cmp::Ordering::Greater => return Err(Error::RowOverflow(row)),
            std::cmp::Ordering::Equal => {}
        }
    }
    if rows.next().is_some() {
        return Err(Error::Overflow);
    }
    Ok(cells)
}

/// Style for [`Board::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces and frames as ASCII characters
    Ascii,
    /// Print pieces and frames as fancy Unicode characters
    Utf8,
}

/// Wrapper to pretty-print the board
///
/// See docs for [`Board::pretty()`] for more details.
pub struct Pretty<'a> {
    board: &'a Board,
    style: PrettyStyle,
}

trait StyleTable {
    const HORZ_FRAME: char;
    const VERT_FRAME: char;

    fn cell(c: Cell) -> char;

    fn border(f: &mut fmt::Formatter<'_>, indent: usize, columns: u8) -> fmt::Result {
        write!(f, "{:indent$}", "")?;
        for _ in 0..columns {
            write!(f, "{}", Self::HORZ_FRAME)?;
        }
        writeln!(f)
    }

    fn fmt(b: &Board, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims = b.dimensions();
        let width = (dims.rows() - 1).to_string().len();
        let indent = width + 1;

        write!(f, "{:indent$}", "")?;
        for column in 0..dims.columns() {
            write!(f, "{}", column % 10)?;
        }
        writeln!(f)?;
        Self::border(f, indent, dims.columns())?;
        for row in 0..dims.rows() {
            write!(f, "{:>width$}{}", row, Self::VERT_FRAME)?;
            for column in 0..dims.columns() {
                let cell = b
                    .get(Coord::new(row, column))
                    .map_or(Cell::EMPTY, |p| p.cell());
                write!(f, "{}", Self::cell(cell))?;
            }
            writeln!(f, "{}", Self::VERT_FRAME)?;
        }
        Self::border(f, indent, dims.columns())
    }
}

struct AsciiStyleTable;
struct Utf8StyleTable;

impl StyleTable for AsciiStyleTable {
    const HORZ_FRAME: char = '-';
    const VERT_FRAME: char = '|';

    fn cell(c: Cell) -> char {
        c.as_char()
    }
}

impl StyleTable for Utf8StyleTable {
    const HORZ_FRAME: char = '─';
    const VERT_FRAME: char = '│';

    fn cell(c: Cell) -> char {
        c.as_utf8_char()
    }
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            PrettyStyle::Ascii => AsciiStyleTable::fmt(self.board, f),
            PrettyStyle::Utf8 => Utf8StyleTable::fmt(self.board, f),
        }
    }
}
