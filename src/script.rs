//! Queue-backed shot source for headless games and tests.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::{
    common::{Coord, GameError, PlayerId},
    config::BOARD_SIZE,
    game::{ShotSource, TargetingView},
};

/// Feeds each player's shots from a fixed FIFO queue.
#[derive(Debug, Clone, Default)]
pub struct ScriptedShots {
    queues: [VecDeque<Coord>; 2],
    rejected: Vec<(PlayerId, Coord)>,
}

impl ScriptedShots {
    pub fn new<A, B>(player_one: A, player_two: B) -> Self
    where
        A: IntoIterator<Item = Coord>,
        B: IntoIterator<Item = Coord>,
    {
        Self {
            queues: [
                player_one.into_iter().collect(),
                player_two.into_iter().collect(),
            ],
            rejected: Vec::new(),
        }
    }

    /// Both players sweep the board in row-major order.
    pub fn sweep() -> Self {
        let n = BOARD_SIZE as usize;
        let cells = move || (0..n).flat_map(move |r| (0..n).map(move |c| (r, c)));
        Self::new(cells(), cells())
    }

    /// Shots still queued for `player`.
    pub fn remaining(&self, player: PlayerId) -> usize {
        self.queue(player).len()
    }

    /// Coordinates the engine refused, in order.
    pub fn rejected(&self) -> &[(PlayerId, Coord)] {
        &self.rejected
    }

    fn queue(&self, player: PlayerId) -> &VecDeque<Coord> {
        match player {
            PlayerId::One => &self.queues[0],
            PlayerId::Two => &self.queues[1],
        }
    }
}

impl ShotSource for ScriptedShots {
    type Error = GameError;

    fn next_shot(&mut self, shooter: PlayerId, _view: &TargetingView<'_>) -> Result<Coord, GameError> {
        let queue = match shooter {
            PlayerId::One => &mut self.queues[0],
            PlayerId::Two => &mut self.queues[1],
        };
        queue.pop_front().ok_or(GameError::ScriptExhausted(shooter))
    }

    fn shot_rejected(&mut self, shooter: PlayerId, coord: Coord, _err: &GameError) {
        self.rejected.push((shooter, coord));
    }
}
