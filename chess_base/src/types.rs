use derive_more::Display;
use std::fmt;
use std::hint;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Longest side of a board supported by [`Dimensions`]
pub const MAX_SIDE: usize = 26;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordParseError {
    #[error("missing ',' between row and column")]
    NoSeparator,
    #[error("bad row: {0}")]
    Row(ParseIntError),
    #[error("bad column: {0}")]
    Column(ParseIntError),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellParseError {
    #[error("unexpected cell char {0:?}")]
    UnexpectedChar(char),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DimensionsError {
    #[error("board must have at least one row and one column")]
    Empty,
    #[error("board side {0} exceeds the maximum of {}", MAX_SIDE)]
    TooLarge(u8),
}

/// Size of a rectangular board
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
#[display(fmt = "{}x{}", rows, columns)]
pub struct Dimensions {
    rows: u8,
    columns: u8,
}

impl Dimensions {
    pub const STANDARD: Dimensions = Dimensions {
        rows: 8,
        columns: 8,
    };

    pub fn new(rows: u8, columns: u8) -> Result<Dimensions, DimensionsError> {
        if rows == 0 || columns == 0 {
            return Err(DimensionsError::Empty);
        }
        for side in [rows, columns] {
            if usize::from(side) > MAX_SIDE {
                return Err(DimensionsError::TooLarge(side));
            }
        }
        Ok(Dimensions { rows, columns })
    }

    pub const fn rows(&self) -> u8 {
        self.rows
    }

    pub const fn columns(&self) -> u8 {
        self.columns
    }

    pub const fn len(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    pub const fn contains(&self, c: Coord) -> bool {
        c.row < self.rows && c.column < self.columns
    }

    /// Row-major index of `c`
    ///
    /// The result is meaningful only if `self.contains(c)` holds.
    pub const fn index(&self, c: Coord) -> usize {
        c.row as usize * self.columns as usize + c.column as usize
    }

    /// Iterates over all the cells, row by row
    pub fn coords(self) -> impl Iterator<Item = Coord> {
        let columns = self.columns;
        (0..self.rows)
            .flat_map(move |row| (0..columns).map(move |column| Coord::new(row, column)))
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Cell coordinate on the board
///
/// Row 0 is the top row when the board is printed, column 0 is the leftmost one. Coordinates
/// are not tied to any particular board, use [`Dimensions::contains()`] to validate them.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "{},{}", row, column)]
pub struct Coord {
    row: u8,
    column: u8,
}

impl Coord {
    pub const fn new(row: u8, column: u8) -> Coord {
        Coord { row, column }
    }

    pub const fn row(&self) -> u8 {
        self.row
    }

    pub const fn column(&self) -> u8 {
        self.column
    }

    /// Shifts the coordinate by the given deltas
    ///
    /// Returns `None` if the result has a negative component. The upper bound is not checked.
    pub fn shift(self, delta_row: i16, delta_column: i16) -> Option<Coord> {
        let row = u8::try_from(i16::from(self.row) + delta_row).ok()?;
        let column = u8::try_from(i16::from(self.column) + delta_column).ok()?;
        Some(Coord { row, column })
    }

    /// Returns `(to.row - self.row, to.column - self.column)`
    pub fn delta(self, to: Coord) -> (i16, i16) {
        (
            i16::from(to.row) - i16::from(self.row),
            i16::from(to.column) - i16::from(self.column),
        )
    }
}

impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, column) = s.split_once(',').ok_or(CoordParseError::NoSeparator)?;
        Ok(Coord {
            row: row.trim().parse().map_err(CoordParseError::Row)?,
            column: column.trim().parse().map_err(CoordParseError::Column)?,
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const fn inv(&self) -> Color {
        match *self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub fn as_char(&self) -> char {
        match *self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// Piece kind
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    Pawn = 0,
    King = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
}

impl Piece {
    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        [
            Piece::Pawn,
            Piece::King,
            Piece::Knight,
            Piece::Bishop,
            Piece::Rook,
            Piece::Queen,
        ]
        .into_iter()
    }
}

/// Contents of a single cell: either empty, or a piece of some color
///
/// This is a compact value type used to describe what stands on the board, e.g. for
/// printing or for layout parsing. It does not track piece identity.
#[derive(Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell(u8);

impl Cell {
    pub const EMPTY: Cell = Cell(0);
    pub const MAX_INDEX: usize = 13;

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const unsafe fn from_index_unchecked(val: usize) -> Cell {
        Cell(val as u8)
    }

    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    pub const fn from_parts(c: Color, p: Piece) -> Cell {
        Cell(match c {
            Color::White => 1 + p as u8,
            Color::Black => 7 + p as u8,
        })
    }

    pub const fn color(&self) -> Option<Color> {
        match self.0 {
            0 => None,
            1..=6 => Some(Color::White),
            _ => Some(Color::Black),
        }
    }

    pub const fn piece(&self) -> Option<Piece> {
        match self.0 {
            0 => None,
            1 | 7 => Some(Piece::Pawn),
            2 | 8 => Some(Piece::King),
            3 | 9 => Some(Piece::Knight),
            4 | 10 => Some(Piece::Bishop),
            5 | 11 => Some(Piece::Rook),
            6 | 12 => Some(Piece::Queen),
            _ => unsafe { hint::unreachable_unchecked() },
        }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0..Self::MAX_INDEX).map(|x| unsafe { Self::from_index_unchecked(x) })
    }

    pub fn as_char(&self) -> char {
        b".PKNBRQpknbrq"[self.0 as usize] as char
    }

    pub fn as_utf8_char(&self) -> char {
        [
            ' ', '♙', '♔', '♘', '♗', '♖', '♕', '♟', '♚', '♞', '♝', '♜', '♛',
        ][self.0 as usize]
    }

    pub fn from_char(c: char) -> Option<Self> {
        if c == '.' {
            return Some(Cell::EMPTY);
        }
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece = match c.to_ascii_lowercase() {
            'p' => Piece::Pawn,
            'k' => Piece::King,
            'n' => Piece::Knight,
            'b' => Piece::Bishop,
            'r' => Piece::Rook,
            'q' => Piece::Queen,
            _ => return None,
        };
        Some(Cell::from_parts(color, piece))
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if (self.0 as usize) < Self::MAX_INDEX {
            return write!(f, "Cell({})", self.as_char());
        }
        write!(f, "Cell(?{:?})", self.0)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Cell {
    type Err = CellParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return Err(CellParseError::BadLength);
        };
        Cell::from_char(ch).ok_or(CellParseError::UnexpectedChar(ch))
    }
}

/// Side of the board towards which the king castles
///
/// `Left` is towards column 0, `Right` is towards the last column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CastlingSide {
    Left = 0,
    Right = 1,
}

impl CastlingSide {
    pub fn iter() -> impl Iterator<Item = Self> {
        [CastlingSide::Left, CastlingSide::Right].into_iter()
    }
}

/// Castling rights of both sides
///
/// Rights can only be lost during the game: once the king or the corresponding rook has moved,
/// the right is never restored.
#[derive(Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CastlingRights(u8);

impl CastlingRights {
    const fn to_index(c: Color, s: CastlingSide) -> u8 {
        ((c as u8) << 1) | s as u8
    }

    pub const EMPTY: CastlingRights = CastlingRights(0);
    pub const FULL: CastlingRights = CastlingRights(15);

    pub const fn has(&self, c: Color, s: CastlingSide) -> bool {
        ((self.0 >> Self::to_index(c, s)) & 1) != 0
    }

    pub fn unset(&mut self, c: Color, s: CastlingSide) {
        self.0 &= !(1_u8 << Self::to_index(c, s))
    }

    pub fn unset_color(&mut self, c: Color) {
        self.unset(c, CastlingSide::Left);
        self.unset(c, CastlingSide::Right);
    }

    /// Returns `true` if every right present in `self` is also present in `other`
    pub const fn is_subset_of(&self, other: CastlingRights) -> bool {
        self.0 & !other.0 == 0
    }
}

impl fmt::Debug for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if self.0 < 16 {
            return write!(f, "CastlingRights({})", self);
        }
        write!(f, "CastlingRights(?{:?})", self.0)
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if *self == Self::EMPTY {
            return write!(f, "-");
        }
        if self.has(Color::White, CastlingSide::Right) {
            write!(f, "R")?;
        }
        if self.has(Color::White, CastlingSide::Left) {
            write!(f, "L")?;
        }
        if self.has(Color::Black, CastlingSide::Right) {
            write!(f, "r")?;
        }
        if self.has(Color::Black, CastlingSide::Left) {
            write!(f, "l")?;
        }
        Ok(())
    }
}
