//! # gridchess
//!
//! Rule engine for chess-like games on rectangular boards.
//!
//! The [`Board`] owns all the pieces and is the only source of truth about the game. It decides
//! whether a move is legal, applies legal moves and answers questions about attacked cells and
//! checks. Legality checks never mutate the board: the position after a candidate move is
//! examined through a read-only [`occupancy::Hypothetical`] view.
//!
//! # Example
//!
//! ```
//! use gridchess::{Board, Color, Coord, MoveError};
//!
//! let mut b = Board::initial();
//! assert!(b.apply_move(Coord::new(6, 4), Coord::new(4, 4)));
//! assert_eq!(b.side(), Color::Black);
//! assert_eq!(
//!     b.try_apply_move(Coord::new(4, 4), Coord::new(3, 4)),
//!     Err(MoveError::WrongTurn(Coord::new(4, 4))),
//! );
//! assert!(!b.is_king_in_check(Color::White));
//! ```

pub mod attack;
pub mod between;
pub mod board;
pub mod castling;
pub mod config;
pub mod movement;
pub mod occupancy;
pub mod types;

mod legal;

pub use gridchess_base::geometry;

pub use board::{Board, LayoutParseError, MoveReport, PlaceError, Pretty, PrettyStyle};
pub use castling::CastlingError;
pub use config::{Config, KingCapture};
pub use legal::MoveError;
pub use occupancy::Occupancy;
pub use types::{
    CastlingRights, CastlingSide, Cell, Color, Coord, Dimensions, Piece, PieceId, PieceRecord,
};
