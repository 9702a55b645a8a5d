use broadside::{
    Cell, GameError, Outcome, Player, PlayerId, ScriptedShots, ShotOutcome, TurnEngine,
    TurnState, PLAYER_ONE_FLEET, PLAYER_TWO_FLEET,
};

fn single_ship_game(p1_ship: (usize, usize), p2_ship: (usize, usize)) -> TurnEngine {
    let mut one = Player::new("Alice");
    one.place_ship("Dinghy", &[p1_ship]).unwrap();
    let mut two = Player::new("Bob");
    two.place_ship("Dinghy", &[p2_ship]).unwrap();
    TurnEngine::new(one, two).unwrap()
}

#[test]
fn test_fresh_engine_awaits_player_one() {
    let engine = single_ship_game((0, 0), (9, 9));
    assert_eq!(engine.state(), TurnState::AwaitingPlayerOneShot);
    assert_eq!(engine.current(), Some(PlayerId::One));
    assert!(!engine.game_over());
    assert_eq!(engine.winner(), None);
    assert_eq!(engine.turns_taken(), 0);
}

#[test]
fn test_empty_fleet_is_rejected() {
    let mut one = Player::new("Alice");
    one.place_ship("Dinghy", &[(0, 0)]).unwrap();
    let err = TurnEngine::new(one, Player::new("Bob")).unwrap_err();
    assert_eq!(err, GameError::EmptyFleet(PlayerId::Two));
}

#[test]
fn test_player_two_sinks_single_ship_and_wins() {
    let mut engine = single_ship_game((0, 0), (9, 9));

    let miss = engine.fire((5, 5)).unwrap();
    assert_eq!(miss.shooter, PlayerId::One);
    assert_eq!(miss.outcome, ShotOutcome::Miss);
    assert!(!miss.outcome.is_hit());
    assert_eq!(miss.state, TurnState::AwaitingPlayerTwoShot);

    let report = engine.fire((0, 0)).unwrap();
    assert_eq!(report.shooter, PlayerId::Two);
    assert_eq!(report.outcome, ShotOutcome::Sunk { ship: 1 });
    assert!(report.outcome.is_hit());
    assert_eq!(report.state, TurnState::GameOver(Outcome::Winner(PlayerId::Two)));

    assert!(engine.game_over());
    assert_eq!(engine.winner(), Some(PlayerId::Two));
    let alice = engine.player(PlayerId::One);
    let bob = engine.player(PlayerId::Two);
    assert!(alice.get_ship(1).unwrap().is_sunk());
    assert_eq!(alice.own_grid().get(0, 0).unwrap(), Cell::Hit);
    assert_eq!(bob.tracking_grid().get(0, 0).unwrap(), Cell::Hit);
    assert_eq!(alice.own_grid().get(5, 5).unwrap(), Cell::Empty);
    assert_eq!(bob.own_grid().get(5, 5).unwrap(), Cell::Miss);
    assert_eq!(alice.tracking_grid().get(5, 5).unwrap(), Cell::Miss);
}

#[test]
fn test_miss_updates_both_views() {
    let mut engine = single_ship_game((0, 0), (9, 9));
    engine.fire((3, 4)).unwrap();
    let one = engine.player(PlayerId::One);
    let two = engine.player(PlayerId::Two);
    assert_eq!(one.tracking_grid().get(3, 4).unwrap(), Cell::Miss);
    assert_eq!(two.own_grid().get(3, 4).unwrap(), Cell::Miss);
    // the shooter's own board is untouched
    assert_eq!(one.own_grid().get(3, 4).unwrap(), Cell::Empty);
    assert_eq!(two.tracking_grid().get(3, 4).unwrap(), Cell::Empty);
}

#[test]
fn test_hit_does_not_grant_extra_shot() {
    let mut one = Player::new("Alice");
    one.place_ship("Skiff", &[(0, 0), (0, 1)]).unwrap();
    let mut two = Player::new("Bob");
    two.place_ship("Skiff", &[(5, 5), (5, 6)]).unwrap();
    let mut engine = TurnEngine::new(one, two).unwrap();

    let report = engine.fire((5, 5)).unwrap();
    assert_eq!(report.outcome, ShotOutcome::Hit { ship: 1 });
    assert_eq!(engine.current(), Some(PlayerId::Two));
}

#[test]
fn test_duplicate_shot_rejected_without_mutation() {
    let mut engine = single_ship_game((0, 0), (9, 9));
    engine.fire((2, 2)).unwrap();
    engine.fire((7, 7)).unwrap();

    let before_one = engine.player(PlayerId::One).tracking_grid().snapshot();
    let before_two = engine.player(PlayerId::Two).own_grid().snapshot();
    let err = engine.fire((2, 2)).unwrap_err();
    assert_eq!(err, GameError::DuplicateShot { row: 2, col: 2 });
    assert!(err.is_boundary());
    assert_eq!(engine.player(PlayerId::One).tracking_grid().snapshot(), before_one);
    assert_eq!(engine.player(PlayerId::Two).own_grid().snapshot(), before_two);
    assert_eq!(engine.current(), Some(PlayerId::One));
    assert_eq!(engine.turns_taken(), 2);
}

#[test]
fn test_same_cell_by_other_player_is_not_duplicate() {
    let mut engine = single_ship_game((0, 0), (9, 9));
    engine.fire((4, 4)).unwrap();
    assert_eq!(engine.fire((4, 4)).unwrap().outcome, ShotOutcome::Miss);
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut engine = single_ship_game((0, 0), (9, 9));
    let err = engine.fire((10, 0)).unwrap_err();
    assert_eq!(err, GameError::OutOfBoundsCoordinate { row: 10, col: 0 });
    assert!(err.is_boundary());
    assert_eq!(engine.current(), Some(PlayerId::One));
}

#[test]
fn test_game_over_is_terminal() {
    let mut engine = single_ship_game((0, 0), (9, 9));
    engine.fire((9, 9)).unwrap();
    assert_eq!(engine.winner(), Some(PlayerId::One));
    assert_eq!(engine.fire((1, 1)).unwrap_err(), GameError::GameOver);
    assert_eq!(engine.turns_taken(), 1);
}

#[test]
fn test_run_alternates_and_retries_boundary_errors() {
    let mut engine = single_ship_game((0, 0), (9, 9));
    // P1 repeats (1, 1) and tries an off-board cell before finding the ship.
    let mut shots = ScriptedShots::new(
        vec![(1, 1), (1, 1), (12, 3), (9, 9)],
        vec![(2, 2)],
    );
    let outcome = engine.run(&mut shots, &mut ()).unwrap();
    assert_eq!(outcome, Outcome::Winner(PlayerId::One));
    assert_eq!(engine.turns_taken(), 3);
    assert_eq!(
        shots.rejected(),
        &[(PlayerId::One, (1, 1)), (PlayerId::One, (12, 3))]
    );
}

#[test]
fn test_run_reports_exhausted_script() {
    let mut engine = single_ship_game((0, 0), (9, 9));
    let mut shots = ScriptedShots::new(vec![(1, 1)], Vec::new());
    let err = engine.run(&mut shots, &mut ()).unwrap_err();
    assert_eq!(err, GameError::ScriptExhausted(PlayerId::Two));
    assert_eq!(engine.current(), Some(PlayerId::Two));
}

#[test]
fn test_standard_fleets_row_sweep() {
    let one = Player::with_fleet("Alice", &PLAYER_ONE_FLEET).unwrap();
    let two = Player::with_fleet("Bob", &PLAYER_TWO_FLEET).unwrap();
    let mut engine = TurnEngine::new(one, two).unwrap();
    let mut shots = ScriptedShots::sweep();

    let outcome = engine.run(&mut shots, &mut ()).unwrap();
    // Player 2's last cell in row-major order is (8, 5); player 1's is (9, 1).
    assert_eq!(outcome, Outcome::Winner(PlayerId::One));
    assert_eq!(engine.turns_taken(), 171);
    assert!(engine.player(PlayerId::Two).all_sunk());
    // Player 2 stopped at (8, 4): the submarine and destroyer survive.
    assert_eq!(engine.player(PlayerId::One).ships_afloat(), 2);
    assert!(shots.rejected().is_empty());
}

#[test]
fn test_run_on_finished_game_returns_outcome() {
    let mut engine = single_ship_game((0, 0), (9, 9));
    engine.fire((9, 9)).unwrap();
    let mut shots = ScriptedShots::new(Vec::new(), Vec::new());
    assert_eq!(
        engine.run(&mut shots, &mut ()).unwrap(),
        Outcome::Winner(PlayerId::One)
    );
}
