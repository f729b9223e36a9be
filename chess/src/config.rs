//! Board configuration

use crate::types::{Color, Dimensions, DimensionsError};

/// What to do with moves that land on the opponent's king
///
/// Checkmate is not detected, so nothing stops the game once a king is left without escape. With
/// [`KingCapture::Allow`], the king can then be taken like any other piece and the side loses its
/// king handle. [`KingCapture::Forbid`] rejects such moves instead.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum KingCapture {
    #[default]
    Forbid,
    Allow,
}

/// Parameters of a [`Board`](crate::board::Board)
///
/// # Example
///
/// ```
/// # use gridchess::{Config, Color, KingCapture};
/// #
/// let config = Config::new(6, 6)
///     .unwrap()
///     .with_first_side(Color::Black)
///     .with_king_capture(KingCapture::Allow);
/// assert_eq!(config.dimensions.to_string(), "6x6");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Config {
    /// Size of the board
    pub dimensions: Dimensions,
    /// Side which makes the first move
    pub first_side: Color,
    /// King capture policy
    pub king_capture: KingCapture,
}

impl Config {
    /// Standard 8x8 board where White moves first and kings cannot be captured
    pub const STANDARD: Config = Config {
        dimensions: Dimensions::STANDARD,
        first_side: Color::White,
        king_capture: KingCapture::Forbid,
    };

    /// Creates the default configuration with the given board size
    pub fn new(rows: u8, columns: u8) -> Result<Config, DimensionsError> {
        Ok(Config {
            dimensions: Dimensions::new(rows, columns)?,
            ..Self::STANDARD
        })
    }

    pub fn with_first_side(self, first_side: Color) -> Config {
        Config { first_side, ..self }
    }

    pub fn with_king_capture(self, king_capture: KingCapture) -> Config {
        Config {
            king_capture,
            ..self
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::STANDARD
    }
}
