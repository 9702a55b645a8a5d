use crate::ship::{Orientation, ShipType};

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Fixed position of one ship in a standard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetPlacement {
    pub ship_type: ShipType,
    pub orientation: Orientation,
    pub row: usize,
    pub col: usize,
}

impl FleetPlacement {
    pub const fn new(ship_type: ShipType, orientation: Orientation, row: usize, col: usize) -> Self {
        Self {
            ship_type,
            orientation,
            row,
            col,
        }
    }
}

/// Standard layout for the first seat.
pub const PLAYER_ONE_FLEET: [FleetPlacement; NUM_SHIPS] = [
    FleetPlacement::new(SHIPS[0], Orientation::Horizontal, 0, 0),
    FleetPlacement::new(SHIPS[1], Orientation::Vertical, 2, 8),
    FleetPlacement::new(SHIPS[2], Orientation::Horizontal, 4, 1),
    FleetPlacement::new(SHIPS[3], Orientation::Vertical, 6, 5),
    FleetPlacement::new(SHIPS[4], Orientation::Horizontal, 9, 0),
];

/// Standard layout for the second seat.
pub const PLAYER_TWO_FLEET: [FleetPlacement; NUM_SHIPS] = [
    FleetPlacement::new(SHIPS[0], Orientation::Vertical, 1, 9),
    FleetPlacement::new(SHIPS[1], Orientation::Horizontal, 8, 2),
    FleetPlacement::new(SHIPS[2], Orientation::Vertical, 0, 0),
    FleetPlacement::new(SHIPS[3], Orientation::Horizontal, 5, 4),
    FleetPlacement::new(SHIPS[4], Orientation::Vertical, 2, 6),
];

/// Seconds the hot-seat view waits after a shot before handing over.
pub const DEFAULT_PAUSE_SECS: u64 = 4;

/// Environment variable holding the log level filter.
pub const LOG_ENV_VAR: &str = "BROADSIDE_LOG";
