use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    common::{Coord, GameError},
    config::{FleetPlacement, BOARD_SIZE},
    grid::Grid,
    ship::Ship,
};

/// Ship type on the standard board.
pub type FleetShip = Ship<u128, { BOARD_SIZE as usize }>;
/// Grid type on the standard board.
pub type BoardGrid = Grid<{ BOARD_SIZE as usize }>;

/// One participant: a named fleet plus the two boards the player looks at.
///
/// The own-grid shows this player's ships and the opponent's shots against
/// them. The tracking-grid records this player's shots at the opponent.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    ships: Vec<FleetShip>,
    own_grid: BoardGrid,
    tracking_grid: BoardGrid,
}

impl Player {
    /// Create a player with no ships and two empty grids.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ships: Vec::new(),
            own_grid: Grid::new(),
            tracking_grid: Grid::new(),
        }
    }

    /// Create a player and place a fixed layout.
    pub fn with_fleet(name: impl Into<String>, layout: &[FleetPlacement]) -> Result<Self, GameError> {
        let mut player = Self::new(name);
        player.place_fleet(layout)?;
        Ok(player)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a ship occupying `coords`, returning its 1-based id. Overlapping an
    /// existing ship leaves the player unchanged.
    pub fn place_ship(&mut self, name: &'static str, coords: &[Coord]) -> Result<usize, GameError> {
        let id = self.ships.len() + 1;
        let ship = FleetShip::from_coords(id, name, coords)?;
        self.add(ship)
    }

    /// Place every ship of a layout in order.
    pub fn place_fleet(&mut self, layout: &[FleetPlacement]) -> Result<(), GameError> {
        for p in layout {
            let id = self.ships.len() + 1;
            let ship = FleetShip::new(id, p.ship_type, p.orientation, p.row, p.col)?;
            self.add(ship)?;
        }
        Ok(())
    }

    fn add(&mut self, ship: FleetShip) -> Result<usize, GameError> {
        let coords: Vec<Coord> = ship.coords().collect();
        self.own_grid.place(&coords)?;
        self.ships.push(ship);
        Ok(ship.id())
    }

    pub fn num_ships(&self) -> usize {
        self.ships.len()
    }

    /// Ship with 1-based id `i`.
    pub fn get_ship(&self, i: usize) -> Result<&FleetShip, GameError> {
        Self::slot(i, self.ships.len()).map(|idx| &self.ships[idx])
    }

    pub(crate) fn get_ship_mut(&mut self, i: usize) -> Result<&mut FleetShip, GameError> {
        let idx = Self::slot(i, self.ships.len())?;
        Ok(&mut self.ships[idx])
    }

    fn slot(i: usize, len: usize) -> Result<usize, GameError> {
        if i == 0 || i > len {
            Err(GameError::InvalidShipIndex(i))
        } else {
            Ok(i - 1)
        }
    }

    /// Ships in ascending id order.
    pub fn ships(&self) -> &[FleetShip] {
        &self.ships
    }

    /// Id of the ship that still has an unhit segment at `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Option<usize> {
        self.ships
            .iter()
            .find(|s| s.valid_space(coord))
            .map(|s| s.id())
    }

    /// True when every ship is sunk. Vacuously true for an empty fleet.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }

    pub fn ships_afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    pub fn own_grid(&self) -> &BoardGrid {
        &self.own_grid
    }

    pub fn tracking_grid(&self) -> &BoardGrid {
        &self.tracking_grid
    }

    pub(crate) fn own_grid_mut(&mut self) -> &mut BoardGrid {
        &mut self.own_grid
    }

    pub(crate) fn tracking_grid_mut(&mut self) -> &mut BoardGrid {
        &mut self.tracking_grid
    }

    /// True if this player already fired at `coord`.
    pub fn has_targeted(&self, coord: Coord) -> Result<bool, GameError> {
        self.tracking_grid.is_targeted(coord)
    }

    /// Map a column letter to its 0-based index: `'a'..='j'` in either case.
    ///
    /// This is the only place letter input enters the crate; everything past it
    /// is 0-indexed.
    pub fn column_from_letter(ch: char) -> Result<usize, GameError> {
        let lower = ch.to_ascii_lowercase();
        let last = (b'a' + BOARD_SIZE - 1) as char;
        if ('a'..=last).contains(&lower) {
            Ok((lower as u8 - b'a') as usize)
        } else {
            Err(GameError::InvalidColumnLetter(ch))
        }
    }
}
