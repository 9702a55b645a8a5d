//! Ship definitions and hit tracking using our `BitBoard`.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::bitboard::BitBoard;
use crate::common::{Coord, GameError};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on an N×N board.
///
/// `mask` is fixed at construction; `hits` only grows and is always a subset
/// of `mask`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    id: usize,
    name: &'static str,
    mask: BitBoard<T, N>,
    hits: BitBoard<T, N>,
}

impl<T, const N: usize> Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Place a linear ship of `ship_type` at (`row`, `col`) with `orientation`.
    pub fn new(
        id: usize,
        ship_type: ShipType,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, GameError> {
        let len = ship_type.length();
        // Ensure placement fits within N×N
        let (start, fixed) = match orientation {
            Orientation::Horizontal => (col, row),
            Orientation::Vertical => (row, col),
        };
        if fixed >= N || start.checked_add(len).map_or(true, |end| end > N) {
            return Err(GameError::ShipOutOfBounds);
        }

        let cells = (0..len).map(|i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        });
        Self::build(id, ship_type.name(), cells)
    }

    /// Ship occupying exactly `coords`. Duplicate coordinates collapse.
    pub fn from_coords(id: usize, name: &'static str, coords: &[Coord]) -> Result<Self, GameError> {
        Self::build(id, name, coords.iter().copied())
    }

    fn build<I>(id: usize, name: &'static str, cells: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mask = BitBoard::<T, N>::from_iter(cells)?;
        if mask.is_empty() {
            return Err(GameError::EmptyShip);
        }
        Ok(Ship {
            id,
            name,
            mask,
            hits: BitBoard::new(),
        })
    }

    /// True iff this ship occupies `coord` and that cell has not been hit yet.
    pub fn valid_space(&self, coord: Coord) -> bool {
        let (row, col) = coord;
        self.mask.get(row, col).unwrap_or(false) && !self.hits.get(row, col).unwrap_or(false)
    }

    /// Record a hit at `coord`. Hitting an already-hit cell is a no-op.
    pub fn hit(&mut self, coord: Coord) -> Result<(), GameError> {
        let (row, col) = coord;
        if !self.mask.get(row, col)? {
            return Err(GameError::CoordinateNotOnShip {
                ship: self.id,
                row,
                col,
            });
        }
        self.hits.set(row, col)?;
        Ok(())
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.mask.is_subset_of(&self.hits)
    }

    /// 1-based id within the owning fleet.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.mask.count_ones()
    }

    pub fn hits_taken(&self) -> usize {
        self.hits.count_ones()
    }

    /// Occupied cells not yet hit.
    pub fn remaining(&self) -> BitBoard<T, N> {
        self.mask & !self.hits
    }

    /// Occupied coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.mask.iter_set_bits()
    }

}

impl<T, const N: usize> fmt::Debug for Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ id: {}, name: \"{}\", len: {}, hits: {} }}",
            self.id,
            self.name,
            self.len(),
            self.hits.count_ones(),
        )
    }
}
