//! Opens a flat-file replay store and reports a batch-by-batch summary of its outcomes,
//! exercising [`hive_engine::replay::ReplayStore`] from the command line.
//!
//! Grounded in the teacher's own `main.rs` use of `clap` for CLI parsing and `env_logger` for
//! output, stripped of everything UHP/agent-specific.

use clap::Parser;
use hive_engine::prelude::*;

#[derive(Parser, Debug)]
#[command(about = "Summarizes the outcomes recorded in a replay store.")]
struct Args
{
    /// Path to a `units;result;turn;moves...` replay file.
    path: std::path::PathBuf,

    /// Number of records to resolve per batch.
    #[arg(long, default_value_t = 64)]
    batch_size: usize,
}

fn main() -> Result<()>
{
    env_logger::init();
    let args = Args::parse();

    let store = ReplayStore::open(&args.path).map_err(|err| Error::internal(err.to_string()))?;
    log::info!("opened {} ({} record(s))", args.path.display(), store.len());

    let mut white_wins = 0usize;
    let mut black_wins = 0usize;
    let mut draws = 0usize;
    let mut resolved = 0usize;

    for batch in store.batches(args.batch_size)
    {
        resolved += batch.len();
        for state in batch
        {
            match outcome(&state)
            {
                | Outcome::Win(Color::White) => white_wins += 1,
                | Outcome::Win(Color::Black) => black_wins += 1,
                | Outcome::Draw if has_lost(&state, Color::White) && has_lost(&state, Color::Black) => draws += 1,
                | Outcome::Draw => {}
            }
        }
    }

    println!("records:     {}", store.len());
    println!("resolved:    {}", resolved);
    println!("skipped:     {}", store.len().saturating_sub(resolved));
    println!("white wins:  {}", white_wins);
    println!("black wins:  {}", black_wins);
    println!("draws:       {}", draws);

    Ok(())
}
