//! Ship definitions and damage tracking on top of `BitBoard`.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::bitboard::BitBoard;
use crate::common::BoardError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn length(&self) -> usize {
        self.length
    }
}

/// A straight ship placed on an N×N board. Damage is kept as a second
/// bitboard so a segment can only be lost once.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    ship_type: ShipType,
    orientation: Orientation,
    row: usize,
    col: usize,
    mask: BitBoard<T, N>,
    hits: BitBoard<T, N>,
}

impl<T, const N: usize> Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Place a ship with its bow at (`row`, `col`), extending right or down.
    pub fn new(
        ship_type: ShipType,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, BoardError> {
        let len = ship_type.length();
        let fits = match orientation {
            Orientation::Horizontal => row < N && col + len <= N,
            Orientation::Vertical => col < N && row + len <= N,
        };
        if !fits {
            return Err(BoardError::ShipOutOfBounds);
        }

        let mut mask = BitBoard::<T, N>::new();
        for i in 0..len {
            let (r, c) = match orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            };
            mask.set(r, c)?;
        }

        Ok(Ship {
            ship_type,
            orientation,
            row,
            col,
            mask,
            hits: BitBoard::new(),
        })
    }

    /// Record a hit at (`row`, `col`). Returns `true` only when an intact
    /// segment was damaged; repeated hits on the same segment are ignored.
    pub fn register_hit(&mut self, row: usize, col: usize) -> bool {
        let on_ship = self.mask.get(row, col).unwrap_or(false);
        let already = self.hits.get(row, col).unwrap_or(true);
        if on_ship && !already {
            let _ = self.hits.set(row, col);
            true
        } else {
            false
        }
    }

    /// Segments not yet hit.
    pub fn health(&self) -> usize {
        self.ship_type.length() - self.hits.count_ones()
    }

    pub fn is_sunk(&self) -> bool {
        self.health() == 0
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col).unwrap_or(false)
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BitBoard<T, N> {
        self.mask
    }
}

impl<T, const N: usize> fmt::Debug for Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: ({}, {}), orientation: {:?}, health: {} }}",
            self.ship_type.name(),
            self.row,
            self.col,
            self.orientation,
            self.health(),
        )
    }
}
