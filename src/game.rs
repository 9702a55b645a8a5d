//! Turn engine: owns both players and resolves shots in strict alternation.

use log::{debug, info, warn};

use crate::{
    common::{Coord, GameError, PlayerId, ShotOutcome},
    grid::GridSnapshot,
    player::Player,
};

/// Snapshot type handed to collaborators.
pub type BoardSnapshot = GridSnapshot<{ crate::config::BOARD_SIZE as usize }>;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Winner(PlayerId),
    /// Both fleets went down in the same cycle.
    Draw,
}

/// Engine state machine. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnState {
    AwaitingPlayerOneShot,
    AwaitingPlayerTwoShot,
    GameOver(Outcome),
}

impl TurnState {
    fn awaiting(player: PlayerId) -> Self {
        match player {
            PlayerId::One => TurnState::AwaitingPlayerOneShot,
            PlayerId::Two => TurnState::AwaitingPlayerTwoShot,
        }
    }
}

/// Everything a single resolved shot produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub shooter: PlayerId,
    pub coord: Coord,
    pub outcome: ShotOutcome,
    /// Engine state after the shot.
    pub state: TurnState,
}

/// Read-only view of the board from the active shooter's seat.
pub struct TargetingView<'a> {
    shooter: &'a Player,
    opponent: &'a Player,
}

impl<'a> TargetingView<'a> {
    pub fn shooter(&self) -> &'a Player {
        self.shooter
    }

    pub fn opponent_name(&self) -> &'a str {
        self.opponent.name()
    }

    pub fn opponent_ships_afloat(&self) -> usize {
        self.opponent.ships_afloat()
    }

    /// The shooter's record of shots fired at the opponent.
    pub fn tracking(&self) -> BoardSnapshot {
        self.shooter.tracking_grid().snapshot()
    }

    /// The shooter's fleet and the opponent's shots against it.
    pub fn own(&self) -> BoardSnapshot {
        self.shooter.own_grid().snapshot()
    }

    /// True if the shooter already fired at `coord`.
    pub fn has_targeted(&self, coord: Coord) -> Result<bool, GameError> {
        self.shooter.has_targeted(coord)
    }
}

/// Input collaborator: supplies the next coordinate for the active shooter.
///
/// Implementations are expected to validate bounds and repeats themselves;
/// the engine re-checks and hands anything it refuses back through
/// [`ShotSource::shot_rejected`] before asking again.
pub trait ShotSource {
    type Error: From<GameError>;

    /// Block until a coordinate is available for `shooter`.
    fn next_shot(&mut self, shooter: PlayerId, view: &TargetingView<'_>) -> Result<Coord, Self::Error>;

    /// Called when the engine refused a coordinate at the boundary.
    fn shot_rejected(&mut self, _shooter: PlayerId, _coord: Coord, _err: &GameError) {}
}

/// Output collaborator: rendering and pacing hooks. The engine itself never
/// prints, sleeps or clears the screen.
pub trait TurnObserver<E> {
    fn turn_started(&mut self, _view: &TargetingView<'_>) -> Result<(), E> {
        Ok(())
    }

    fn shot_resolved(&mut self, _report: &ShotReport, _view: &TargetingView<'_>) -> Result<(), E> {
        Ok(())
    }

    fn game_over(&mut self, _outcome: Outcome, _engine: &TurnEngine) -> Result<(), E> {
        Ok(())
    }
}

/// Observer that ignores every event.
impl<E> TurnObserver<E> for () {}

/// Core game logic holding both players for the lifetime of the game.
#[derive(Debug)]
pub struct TurnEngine {
    players: [Player; 2],
    state: TurnState,
    turns: usize,
}

impl TurnEngine {
    /// Take ownership of both players. Player one shoots first.
    pub fn new(player_one: Player, player_two: Player) -> Result<Self, GameError> {
        if player_one.num_ships() == 0 {
            return Err(GameError::EmptyFleet(PlayerId::One));
        }
        if player_two.num_ships() == 0 {
            return Err(GameError::EmptyFleet(PlayerId::Two));
        }
        Ok(Self {
            players: [player_one, player_two],
            state: TurnState::AwaitingPlayerOneShot,
            turns: 0,
        })
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Player whose shot is awaited, or `None` once the game is over.
    pub fn current(&self) -> Option<PlayerId> {
        match self.state {
            TurnState::AwaitingPlayerOneShot => Some(PlayerId::One),
            TurnState::AwaitingPlayerTwoShot => Some(PlayerId::Two),
            TurnState::GameOver(_) => None,
        }
    }

    pub fn game_over(&self) -> bool {
        matches!(self.state, TurnState::GameOver(_))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            TurnState::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.outcome() {
            Some(Outcome::Winner(p)) => Some(p),
            _ => None,
        }
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[Self::index(id)]
    }

    /// Number of shots resolved so far.
    pub fn turns_taken(&self) -> usize {
        self.turns
    }

    /// View from `shooter`'s seat.
    pub fn view(&self, shooter: PlayerId) -> TargetingView<'_> {
        TargetingView {
            shooter: self.player(shooter),
            opponent: self.player(shooter.opponent()),
        }
    }

    /// Resolve one shot by the active player and advance the turn.
    ///
    /// Out-of-bounds and repeated coordinates are refused before anything is
    /// written. Any other error means an internal invariant broke.
    pub fn fire(&mut self, coord: Coord) -> Result<ShotReport, GameError> {
        let shooter = self.current().ok_or(GameError::GameOver)?;
        let (row, col) = coord;
        if self.player(shooter).has_targeted(coord)? {
            return Err(GameError::DuplicateShot { row, col });
        }

        let outcome = self.resolve(shooter, coord)?;
        self.turns += 1;
        debug!("{} fires at ({}, {}): {:?}", shooter, row, col, outcome);
        if let ShotOutcome::Sunk { ship } = outcome {
            let target = self.player(shooter.opponent());
            info!("{} sank {}'s ship {}", shooter, target.name(), ship);
        }

        self.state = match self.evaluate() {
            Some(outcome) => {
                info!("game over after {} shots: {:?}", self.turns, outcome);
                TurnState::GameOver(outcome)
            }
            None => TurnState::awaiting(shooter.opponent()),
        };

        Ok(ShotReport {
            shooter,
            coord,
            outcome,
            state: self.state,
        })
    }

    /// Drive turns until the game ends, asking `source` for shots and telling
    /// `observer` what happened.
    pub fn run<S, O>(&mut self, source: &mut S, observer: &mut O) -> Result<Outcome, S::Error>
    where
        S: ShotSource,
        O: TurnObserver<S::Error> + ?Sized,
    {
        loop {
            let shooter = match self.current() {
                Some(p) => p,
                None => return Ok(self.outcome().ok_or(GameError::GameOver)?),
            };
            observer.turn_started(&self.view(shooter))?;

            let report = loop {
                let coord = source.next_shot(shooter, &self.view(shooter))?;
                match self.fire(coord) {
                    Ok(report) => break report,
                    Err(err) if err.is_boundary() => {
                        warn!("{} shot at {:?} rejected: {}", shooter, coord, err);
                        source.shot_rejected(shooter, coord, &err);
                    }
                    Err(err) => return Err(err.into()),
                }
            };
            observer.shot_resolved(&report, &self.view(shooter))?;

            if let TurnState::GameOver(outcome) = report.state {
                observer.game_over(outcome, self)?;
                return Ok(outcome);
            }
        }
    }

    fn resolve(&mut self, shooter: PlayerId, coord: Coord) -> Result<ShotOutcome, GameError> {
        let [one, two] = &mut self.players;
        let (attacker, defender) = match shooter {
            PlayerId::One => (one, two),
            PlayerId::Two => (two, one),
        };

        // Ships are disjoint, so at most one matches; 0 means open water.
        let flag = defender.ship_at(coord).unwrap_or(0);
        if flag > 0 {
            attacker.tracking_grid_mut().update(coord, true)?;
            let ship = defender.get_ship_mut(flag)?;
            ship.hit(coord)?;
            let sunk = ship.is_sunk();
            defender.own_grid_mut().update(coord, true)?;
            Ok(if sunk {
                ShotOutcome::Sunk { ship: flag }
            } else {
                ShotOutcome::Hit { ship: flag }
            })
        } else {
            attacker.tracking_grid_mut().update(coord, false)?;
            defender.own_grid_mut().update(coord, false)?;
            Ok(ShotOutcome::Miss)
        }
    }

    fn evaluate(&self) -> Option<Outcome> {
        match (self.players[0].all_sunk(), self.players[1].all_sunk()) {
            (true, true) => Some(Outcome::Draw),
            (true, false) => Some(Outcome::Winner(PlayerId::Two)),
            (false, true) => Some(Outcome::Winner(PlayerId::One)),
            (false, false) => None,
        }
    }

    fn index(id: PlayerId) -> usize {
        match id {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}
