//! Common types for the game: coordinates, player identities, shot outcomes
//! and the crate-wide error type.

use crate::bitboard::BitBoardError;
use core::fmt;

/// Zero-based `(row, col)` board coordinate.
pub type Coord = (usize, usize);

/// Which seat a player occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The other seat.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 1-based seat number, for display.
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Result of a resolved shot, from the shooter's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot hit the ship with this id without sinking it.
    Hit { ship: usize },
    /// Shot hit the ship with this id and sank it.
    Sunk { ship: usize },
}

impl ShotOutcome {
    /// True for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned by grid, ship, player and engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate lies outside the board.
    OutOfBoundsCoordinate { row: usize, col: usize },
    /// The shooter already fired at this cell.
    DuplicateShot { row: usize, col: usize },
    /// Ship placement overlaps a cell that is not empty.
    OccupiedPlacement { row: usize, col: usize },
    /// Ship lookup outside `1..=num_ships`.
    InvalidShipIndex(usize),
    /// Column letter outside `a..=j`.
    InvalidColumnLetter(char),
    /// A hit was recorded against a cell the ship does not occupy.
    CoordinateNotOnShip { ship: usize, row: usize, col: usize },
    /// Linear ship does not fit on the board from its origin.
    ShipOutOfBounds,
    /// Ship built from an empty coordinate list.
    EmptyShip,
    /// A player entered the game without ships.
    EmptyFleet(PlayerId),
    /// The game has already been decided.
    GameOver,
    /// A scripted shot queue ran dry.
    ScriptExhausted(PlayerId),
}

impl GameError {
    /// Errors caused by collaborator input. These are recovered by asking
    /// for another coordinate and never reach engine state.
    pub fn is_boundary(&self) -> bool {
        matches!(
            self,
            GameError::OutOfBoundsCoordinate { .. }
                | GameError::DuplicateShot { .. }
                | GameError::InvalidColumnLetter(_)
        )
    }
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => {
                GameError::OutOfBoundsCoordinate { row, col }
            }
            // Only reachable with a board dimension the word type cannot hold.
            BitBoardError::SizeTooLarge { .. } => GameError::ShipOutOfBounds,
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfBoundsCoordinate { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the board", row, col)
            }
            GameError::DuplicateShot { row, col } => {
                write!(f, "A shot was already fired at ({}, {})", row, col)
            }
            GameError::OccupiedPlacement { row, col } => {
                write!(f, "Cell ({}, {}) is already occupied", row, col)
            }
            GameError::InvalidShipIndex(i) => write!(f, "Ship index {} is out of range", i),
            GameError::InvalidColumnLetter(ch) => {
                write!(f, "Column '{}' is not a letter from A to J", ch)
            }
            GameError::CoordinateNotOnShip { ship, row, col } => {
                write!(f, "Ship {} does not occupy ({}, {})", ship, row, col)
            }
            GameError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            GameError::EmptyShip => write!(f, "Ship has no coordinates"),
            GameError::EmptyFleet(player) => write!(f, "{} has no ships", player),
            GameError::GameOver => write!(f, "The game is already over"),
            GameError::ScriptExhausted(player) => {
                write!(f, "No scripted shots left for {}", player)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
