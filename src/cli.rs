#![cfg(feature = "std")]

//! Console collaborators for hot-seat play: a prompting shot source and a
//! board renderer with pacing between turns.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context};

use crate::{
    common::{Coord, GameError, PlayerId, ShotOutcome},
    config::{BOARD_SIZE, DEFAULT_PAUSE_SECS},
    game::{Outcome, ShotReport, ShotSource, TargetingView, TurnEngine, TurnObserver, TurnState},
    grid::{Cell, GridSnapshot},
    player::Player,
};

/// ANSI sequence that clears the terminal and homes the cursor.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Render a board view. Ships are drawn only when `reveal_ships` is set, so a
/// tracking view never leaks the opponent's layout.
pub fn render_grid<const N: usize>(snapshot: &GridSnapshot<N>, reveal_ships: bool) -> String {
    let mut out = String::from("  |");
    for c in 0..N {
        out.push((b'A' + c as u8) as char);
        out.push('|');
    }
    out.push('\n');
    for (r, row) in snapshot.iter().enumerate() {
        out.push_str(&format!("{:>2}", r + 1));
        for cell in row {
            out.push('|');
            out.push(cell_symbol(*cell, reveal_ships));
        }
        out.push_str("|\n");
    }
    out
}

fn cell_symbol(cell: Cell, reveal_ships: bool) -> char {
    match cell {
        Cell::Empty => '_',
        Cell::ShipPresent if reveal_ships => 'S',
        Cell::ShipPresent => '_',
        Cell::Hit => 'X',
        Cell::Miss => 'O',
    }
}

/// Human-readable form of a 0-based coordinate, e.g. `C7`.
pub fn coord_to_string(coord: Coord) -> String {
    let col = (b'A' + coord.1 as u8) as char;
    format!("{}{}", col, coord.0 + 1)
}

/// Prompts for a row number and a column letter until it gets a coordinate
/// that is on the board and not yet fired at.
pub struct ConsoleShots<R, W> {
    input: R,
    output: W,
    buf: String,
}

impl<R: BufRead, W: Write> ConsoleShots<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
        }
    }

    /// Print `prompt` and read one trimmed line. EOF is an error.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<&str> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.buf.clear();
        let read = self
            .input
            .read_line(&mut self.buf)
            .context("failed to read from input")?;
        if read == 0 {
            return Err(anyhow!("input closed before the game finished"));
        }
        Ok(self.buf.trim())
    }

    fn read_row(&mut self) -> anyhow::Result<usize> {
        let max = BOARD_SIZE as usize;
        let mut prompt = "Please enter your shot's row: ";
        loop {
            let parsed = self.read_line(prompt)?.parse::<usize>();
            match parsed {
                Ok(row) if (1..=max).contains(&row) => return Ok(row - 1),
                _ => prompt = "Bad number (min 1, max 10) please try again: ",
            }
        }
    }

    fn read_column(&mut self) -> anyhow::Result<usize> {
        let mut prompt = "Please enter your shot's column: ";
        loop {
            let line = self.read_line(prompt)?;
            let mut chars = line.chars();
            let col = match (chars.next(), chars.next()) {
                (Some(ch), None) => Player::column_from_letter(ch).ok(),
                _ => None,
            };
            match col {
                Some(col) => return Ok(col),
                None => prompt = "Bad Letter (a through j) please try again: ",
            }
        }
    }
}

impl<R: BufRead, W: Write> ShotSource for ConsoleShots<R, W> {
    type Error = anyhow::Error;

    fn next_shot(&mut self, _shooter: PlayerId, view: &TargetingView<'_>) -> anyhow::Result<Coord> {
        loop {
            let row = self.read_row()?;
            let col = self.read_column()?;
            if view.has_targeted((row, col))? {
                writeln!(self.output, "You have already taken this shot! Try again.")?;
                continue;
            }
            return Ok((row, col));
        }
    }

    fn shot_rejected(&mut self, _shooter: PlayerId, _coord: Coord, err: &GameError) {
        if let Err(io) = writeln!(self.output, "{}. Try again.", err) {
            log::debug!("could not report rejected shot: {}", io);
        }
    }
}

/// Hot-seat pacing between turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Delay after a shot so the shooter can read the result.
    pub pause: Duration,
    /// Clear the terminal before the next player sits down.
    pub clear_screen: bool,
}

impl Pacing {
    /// No delay and no clearing; used for piped or scripted output.
    pub fn immediate() -> Self {
        Self {
            pause: Duration::ZERO,
            clear_screen: false,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            pause: Duration::from_secs(DEFAULT_PAUSE_SECS),
            clear_screen: true,
        }
    }
}

/// Prints both boards around each shot and announces the result.
pub struct ConsoleView<W> {
    output: W,
    pacing: Pacing,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(output: W, pacing: Pacing) -> Self {
        Self { output, pacing }
    }

    /// Recover the writer, e.g. to inspect captured output.
    pub fn into_inner(self) -> W {
        self.output
    }

    fn print_boards(&mut self, view: &TargetingView<'_>) -> anyhow::Result<()> {
        writeln!(self.output, "\nOpponent board:")?;
        write!(self.output, "{}", render_grid(&view.tracking(), false))?;
        writeln!(self.output, "\nYour board:")?;
        write!(self.output, "{}", render_grid(&view.own(), true))?;
        Ok(())
    }

    fn hand_over(&mut self) -> anyhow::Result<()> {
        self.output.flush()?;
        if !self.pacing.pause.is_zero() {
            thread::sleep(self.pacing.pause);
        }
        if self.pacing.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN)?;
        }
        Ok(())
    }
}

impl<W: Write> TurnObserver<anyhow::Error> for ConsoleView<W> {
    fn turn_started(&mut self, view: &TargetingView<'_>) -> anyhow::Result<()> {
        writeln!(self.output, "{}'s Turn.", view.shooter().name())?;
        self.print_boards(view)
    }

    fn shot_resolved(&mut self, report: &ShotReport, view: &TargetingView<'_>) -> anyhow::Result<()> {
        let name = view.shooter().name();
        let at = coord_to_string(report.coord);
        let verdict = if report.outcome.is_hit() { "Hit" } else { "Miss" };
        write!(self.output, "{} {} at {}!", name, verdict, at)?;
        if let ShotOutcome::Sunk { ship } = report.outcome {
            write!(
                self.output,
                " {}'s ship {} has been sunk ({} left afloat).",
                view.opponent_name(),
                ship,
                view.opponent_ships_afloat()
            )?;
        }
        writeln!(self.output)?;
        self.print_boards(view)?;
        match report.state {
            TurnState::GameOver(_) => Ok(self.output.flush()?),
            _ => self.hand_over(),
        }
    }

    fn game_over(&mut self, outcome: Outcome, engine: &TurnEngine) -> anyhow::Result<()> {
        let one = engine.player(PlayerId::One);
        let two = engine.player(PlayerId::Two);
        match outcome {
            Outcome::Winner(winner) => {
                writeln!(
                    self.output,
                    "\n{}'s ships have been sunk. {} wins!",
                    engine.player(winner.opponent()).name(),
                    engine.player(winner).name()
                )?;
            }
            Outcome::Draw => {
                writeln!(self.output, "\nBoth fleets have been sunk. The game is a draw.")?;
            }
        }
        for player in [one, two] {
            writeln!(self.output, "\n{}'s board:", player.name())?;
            write!(self.output, "{}", render_grid(&player.own_grid().snapshot(), true))?;
        }
        self.output.flush()?;
        Ok(())
    }
}
