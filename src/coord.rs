//! Board coordinates and their two-character text form.
//!
//! A move is written as a column letter `A`–`I` followed by a row digit
//! `1`–`9`, so `A1` is the top-left cell and `I9` the bottom-right one. The
//! same two ASCII bytes travel on the wire.

use core::fmt;
use core::str::FromStr;

use crate::config::BOARD_SIZE;

/// A cell on the board. Construction guarantees both coordinates are in
/// range, so boards never have to bounds-check a `Move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    row: u8,
    col: u8,
}

/// Why a candidate move string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// The input was not exactly two characters.
    WrongLength(usize),
    /// The first character is not a column letter `A`–`I`.
    BadColumn(char),
    /// The second character is not a row digit `1`–`9`.
    BadRow(char),
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::WrongLength(n) => {
                write!(f, "expected two characters like B7, got {}", n)
            }
            MoveParseError::BadColumn(c) => write!(f, "'{}' is not a column A-I", c),
            MoveParseError::BadRow(c) => write!(f, "'{}' is not a row 1-9", c),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveParseError {}

const LAST_COLUMN: u8 = b'A' + BOARD_SIZE - 1;
const LAST_ROW: u8 = b'1' + BOARD_SIZE - 1;

impl Move {
    /// Returns `None` unless both coordinates lie on the board.
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Move { row, col })
        } else {
            None
        }
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// (row, col) as indices for bitboard access.
    pub const fn index(self) -> (usize, usize) {
        (self.row as usize, self.col as usize)
    }

    /// Decode the two-byte form: column letter, then row digit.
    pub fn from_bytes(bytes: [u8; 2]) -> Result<Self, MoveParseError> {
        let [letter, digit] = bytes;
        if !(b'A'..=LAST_COLUMN).contains(&letter) {
            return Err(MoveParseError::BadColumn(letter as char));
        }
        if !(b'1'..=LAST_ROW).contains(&digit) {
            return Err(MoveParseError::BadRow(digit as char));
        }
        Ok(Move {
            row: digit - b'1',
            col: letter - b'A',
        })
    }

    /// Encode as column letter followed by row digit.
    pub const fn to_bytes(self) -> [u8; 2] {
        [b'A' + self.col, b'1' + self.row]
    }

    /// Every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Move { row, col }))
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parses typed input. Surrounding whitespace is ignored; the column
    /// letter must be upper case, as on the wire.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(MoveParseError::WrongLength(s.chars().count()));
        };
        if !letter.is_ascii() {
            return Err(MoveParseError::BadColumn(letter));
        }
        if !digit.is_ascii() {
            return Err(MoveParseError::BadRow(digit));
        }
        Move::from_bytes([letter as u8, digit as u8])
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [letter, digit] = self.to_bytes();
        write!(f, "{}{}", letter as char, digit as char)
    }
}
