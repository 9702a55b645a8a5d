use broadside::{FleetShip, GameError, Orientation, ShipType, SHIPS};

#[test]
fn test_linear_ship_coords() {
    let ship = FleetShip::new(1, SHIPS[2], Orientation::Vertical, 4, 1).unwrap();
    assert_eq!(ship.id(), 1);
    assert_eq!(ship.name(), "Cruiser");
    assert_eq!(ship.len(), 3);
    assert_eq!(ship.coords().collect::<Vec<_>>(), vec![(4, 1), (5, 1), (6, 1)]);
}

#[test]
fn test_linear_ship_out_of_bounds() {
    let err = FleetShip::new(1, SHIPS[0], Orientation::Horizontal, 0, 6).unwrap_err();
    assert_eq!(err, GameError::ShipOutOfBounds);
    let err = FleetShip::new(1, SHIPS[4], Orientation::Vertical, 9, 0).unwrap_err();
    assert_eq!(err, GameError::ShipOutOfBounds);
}

#[test]
fn test_linear_ship_huge_origin_is_out_of_bounds() {
    let err = FleetShip::new(1, SHIPS[0], Orientation::Horizontal, 0, usize::MAX).unwrap_err();
    assert_eq!(err, GameError::ShipOutOfBounds);
    let err = FleetShip::new(1, SHIPS[4], Orientation::Vertical, usize::MAX - 1, 0).unwrap_err();
    assert_eq!(err, GameError::ShipOutOfBounds);
    let err = FleetShip::new(1, SHIPS[4], Orientation::Horizontal, usize::MAX, 0).unwrap_err();
    assert_eq!(err, GameError::ShipOutOfBounds);
}

#[test]
fn test_from_coords_rejects_empty_and_out_of_bounds() {
    assert_eq!(FleetShip::from_coords(1, "Raft", &[]).unwrap_err(), GameError::EmptyShip);
    assert_eq!(
        FleetShip::from_coords(1, "Raft", &[(0, 0), (10, 0)]).unwrap_err(),
        GameError::OutOfBoundsCoordinate { row: 10, col: 0 }
    );
}

#[test]
fn test_valid_space_flips_after_hit() {
    let mut ship = FleetShip::from_coords(2, "Tug", &[(3, 3), (3, 4)]).unwrap();
    assert!(ship.valid_space((3, 3)));
    assert!(!ship.valid_space((3, 5)));
    assert!(!ship.valid_space((42, 0)));

    ship.hit((3, 3)).unwrap();
    assert!(!ship.valid_space((3, 3)));
    assert!(ship.valid_space((3, 4)));
    assert_eq!(ship.hits_taken(), 1);
}

#[test]
fn test_hit_off_ship_is_error() {
    let mut ship = FleetShip::from_coords(3, "Tug", &[(0, 0)]).unwrap();
    assert_eq!(
        ship.hit((1, 1)).unwrap_err(),
        GameError::CoordinateNotOnShip { ship: 3, row: 1, col: 1 }
    );
    assert_eq!(ship.hits_taken(), 0);
}

#[test]
fn test_sunk_only_when_every_cell_hit() {
    let ship_type = ShipType::new("Patrol", 2);
    let mut ship = FleetShip::new(1, ship_type, Orientation::Horizontal, 7, 7).unwrap();
    assert!(!ship.is_sunk());
    ship.hit((7, 7)).unwrap();
    assert!(!ship.is_sunk());
    assert_eq!(ship.remaining().count_ones(), 1);
    ship.hit((7, 8)).unwrap();
    assert!(ship.is_sunk());
    assert!(ship.remaining().is_empty());

    // repeat hits do not un-sink it
    ship.hit((7, 8)).unwrap();
    assert!(ship.is_sunk());
}
