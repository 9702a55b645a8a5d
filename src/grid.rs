//! Fixed-size cell matrix for one board view.

use crate::common::{Coord, GameError};
use core::fmt;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    ShipPresent,
    Hit,
    Miss,
}

impl Cell {
    /// True once a shot has resolved on this cell.
    pub fn is_shot(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// Read-only copy of a grid's cells, row-major.
pub type GridSnapshot<const N: usize> = [[Cell; N]; N];

/// An N×N board view.
///
/// Cells move from `Empty` to `ShipPresent` once at placement and from
/// `Empty`/`ShipPresent` to `Hit`/`Miss` once at shot resolution.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid<const N: usize> {
    cells: [[Cell; N]; N],
}

impl<const N: usize> Grid<N> {
    /// Create a grid with every cell empty.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; N]; N],
        }
    }

    /// Side length of the grid.
    pub const fn size(&self) -> usize {
        N
    }

    /// Cell state at (`row`, `col`).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        Self::check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Mark every coordinate as holding a ship. Nothing is written unless all
    /// coordinates are in bounds and empty.
    pub fn place(&mut self, coords: &[Coord]) -> Result<(), GameError> {
        for &(row, col) in coords {
            if self.get(row, col)? != Cell::Empty {
                return Err(GameError::OccupiedPlacement { row, col });
            }
        }
        for &(row, col) in coords {
            self.cells[row][col] = Cell::ShipPresent;
        }
        Ok(())
    }

    /// Record the outcome of a shot at `coord`.
    pub fn update(&mut self, coord: Coord, is_hit: bool) -> Result<(), GameError> {
        let (row, col) = coord;
        if self.get(row, col)?.is_shot() {
            return Err(GameError::DuplicateShot { row, col });
        }
        self.cells[row][col] = if is_hit { Cell::Hit } else { Cell::Miss };
        Ok(())
    }

    /// True if a shot already resolved at `coord`.
    pub fn is_targeted(&self, coord: Coord) -> Result<bool, GameError> {
        Ok(self.get(coord.0, coord.1)?.is_shot())
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == state)
            .count()
    }

    /// Copy of the full cell matrix for rendering.
    pub fn snapshot(&self) -> GridSnapshot<N> {
        self.cells
    }

    fn check_bounds(row: usize, col: usize) -> Result<(), GameError> {
        if row >= N || col >= N {
            Err(GameError::OutOfBoundsCoordinate { row, col })
        } else {
            Ok(())
        }
    }
}

impl<const N: usize> Default for Grid<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Grid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}>:", N)?;
        for row in &self.cells {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::ShipPresent => 'S',
                    Cell::Hit => 'X',
                    Cell::Miss => 'o',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
