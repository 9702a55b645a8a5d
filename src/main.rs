#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    cli::{render_grid, ConsoleShots, ConsoleView, Pacing},
    init_logging, Outcome, Player, TurnEngine, DEFAULT_PAUSE_SECS, PLAYER_ONE_FLEET,
    PLAYER_TWO_FLEET,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Hot-seat Battleship for two players", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a hot-seat game on this terminal.
    Play {
        #[arg(long, default_value = "Player 1")]
        player_one: String,
        #[arg(long, default_value = "Player 2")]
        player_two: String,
        #[arg(long, default_value_t = DEFAULT_PAUSE_SECS, help = "Seconds to wait before handing over")]
        pause_secs: u64,
        #[arg(long, help = "Do not clear the terminal between turns")]
        no_clear: bool,
    },
    /// Print both standard fleet layouts.
    Layout,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            player_one,
            player_two,
            pause_secs,
            no_clear,
        } => {
            let one = Player::with_fleet(player_one, &PLAYER_ONE_FLEET)?;
            let two = Player::with_fleet(player_two, &PLAYER_TWO_FLEET)?;
            let mut engine = TurnEngine::new(one, two)?;

            let stdin = std::io::stdin();
            let mut shots = ConsoleShots::new(stdin.lock(), std::io::stdout());
            let mut view = ConsoleView::new(
                std::io::stdout(),
                Pacing {
                    pause: Duration::from_secs(pause_secs),
                    clear_screen: !no_clear,
                },
            );

            match engine.run(&mut shots, &mut view)? {
                Outcome::Winner(winner) => {
                    log::info!("{} won in {} shots", engine.player(winner).name(), engine.turns_taken())
                }
                Outcome::Draw => log::info!("draw after {} shots", engine.turns_taken()),
            }
        }
        Commands::Layout => {
            for (label, layout) in [("Player 1", &PLAYER_ONE_FLEET), ("Player 2", &PLAYER_TWO_FLEET)] {
                let player = Player::with_fleet(label, layout)?;
                println!("{}:", label);
                for ship in player.ships() {
                    println!("  {} {} ({} cells)", ship.id(), ship.name(), ship.len());
                }
                print!("{}", render_grid(&player.own_grid().snapshot(), true));
                println!();
            }
        }
    }
    Ok(())
}
