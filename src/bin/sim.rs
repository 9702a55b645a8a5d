use broadside::{
    init_logging, Cell, Player, PlayerId, ScriptedShots, TurnEngine, BOARD_SIZE,
    PLAYER_ONE_FLEET, PLAYER_TWO_FLEET,
};
use clap::Parser;
use serde_json::json;

/// Play both standard fleets against each other with scripted sweeps and
/// print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, help = "Player 2 sweeps column by column instead of row by row")]
    column_major_two: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let n = BOARD_SIZE as usize;
    let rows: Vec<_> = (0..n).flat_map(|r| (0..n).map(move |c| (r, c))).collect();
    let cols: Vec<_> = (0..n).flat_map(|c| (0..n).map(move |r| (r, c))).collect();
    let mut shots = if args.column_major_two {
        ScriptedShots::new(rows, cols)
    } else {
        ScriptedShots::sweep()
    };

    let one = Player::with_fleet("player1", &PLAYER_ONE_FLEET)?;
    let two = Player::with_fleet("player2", &PLAYER_TWO_FLEET)?;
    let mut engine = TurnEngine::new(one, two)?;
    let outcome = engine.run(&mut shots, &mut ())?;

    let summary = |id: PlayerId| {
        let p = engine.player(id);
        let tracking = p.tracking_grid();
        json!({
            "name": p.name(),
            "shots": tracking.count(Cell::Hit) + tracking.count(Cell::Miss),
            "hits": tracking.count(Cell::Hit),
            "ships_afloat": p.ships_afloat(),
        })
    };

    let result = json!({
        "outcome": outcome,
        "winner": engine.winner().map(|w| engine.player(w).name().to_string()),
        "turns": engine.turns_taken(),
        "player1": summary(PlayerId::One),
        "player2": summary(PlayerId::Two),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
