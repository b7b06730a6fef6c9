//! Replays a plain-text trajectory file (one move string per line, per
//! [`hive_engine::replay::GameRecord`]'s move grammar) from the initial position, printing each
//! ply's canonical notation and the final outcome.
//!
//! Grounded in the teacher's own `main.rs` use of `clap` for CLI parsing and `env_logger` for
//! output, stripped of everything UHP/agent-specific — this binary only exercises the notation
//! and replay surface of the engine.

use clap::Parser;
use hive_engine::prelude::*;

#[derive(Parser, Debug)]
#[command(about = "Replays a trajectory file and prints each move's canonical notation.")]
struct Args
{
    /// Path to a trajectory file, one move string per line.
    path: std::path::PathBuf,

    /// Enables the Ladybug, Mosquito, and Pillbug expansion pieces.
    #[arg(long)]
    expansion: bool,
}

fn main() -> Result<()>
{
    env_logger::init();
    let args = Args::parse();

    let moves = load_trajectory(&args.path)?;
    log::info!("loaded {} move(s) from {}", moves.len(), args.path.display());

    let options = Options {
        expansions: if args.expansion { ExpansionOptions::all() } else { ExpansionOptions::default() },
    };

    let mut state = GameState::initial(options);
    for movestr in &moves
    {
        let mv = parse_move(&state, movestr.as_ref())?;
        println!("{:>4} {}", Turn::current(&state).turn, format_move(&state, &mv));
        state = apply(&state, mv)?;
    }

    match outcome(&state)
    {
        | Outcome::Win(color) => println!("{} wins.", color),
        | Outcome::Draw if has_lost(&state, Color::White) && has_lost(&state, Color::Black) => println!("Draw (both Queens surrounded)."),
        | Outcome::Draw => println!("{} to move.", state.current_turn()),
    }

    Ok(())
}
