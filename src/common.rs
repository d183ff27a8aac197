//! Common types for the board: shot outcomes, cell states and board errors.

use crate::bitboard::BitBoardError;

/// Outcome of resolving a shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// The shot landed in water, or on a cell that had already been shot.
    Miss,
    /// The shot damaged a ship that still has intact segments.
    Hit,
    /// The shot destroyed the last intact segment of a ship.
    Kill,
}

/// Observable state of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Nothing is known about the cell (shadow board only).
    Unknown,
    /// Water that has not been shot.
    Empty,
    /// An intact ship segment (own board only).
    Ship,
    /// A shot that landed in water.
    Miss,
    /// A damaged segment of a ship that is still afloat.
    Hit,
    /// A segment of a sunk ship.
    Killed,
}

impl Cell {
    /// Character used when rendering the cell.
    pub const fn glyph(self) -> char {
        match self {
            Cell::Unknown => '?',
            Cell::Empty => '.',
            Cell::Ship => 'o',
            Cell::Miss => '*',
            Cell::Hit => 'x',
            Cell::Killed => '#',
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoardError(BitBoardError),
    /// Specified fleet index is out of range.
    InvalidIndex,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Ship placement overlaps or touches another ship.
    ShipTouches,
    /// Ship does not fit on the board.
    ShipOutOfBounds,
    /// Random placement gave up on a ship.
    UnableToPlaceShip,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidIndex => write!(f, "Fleet index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipTouches => write!(f, "Ship overlaps or touches another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
