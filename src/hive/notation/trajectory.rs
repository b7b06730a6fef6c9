//! Plain-text trajectory files: one move string per line, used by tooling that records or
//! replays a single game independently of the line-oriented [`crate::replay::ReplayStore`].

use std::fs;
use std::path::Path;

use crate::hive::notation::moves::MoveString;
use crate::prelude::*;

/// Writes `moves` to `path`, one per line, overwriting any existing file.
pub fn save_trajectory(moves: &[MoveString], path: impl AsRef<Path>) -> Result<()>
{
    let body = moves.iter().map(|mv| mv.as_ref()).collect::<Vec<_>>().join("\n");
    fs::write(path, body)?;
    Ok(())
}

/// Reads a trajectory file back into the validated move strings it holds.
pub fn load_trajectory(path: impl AsRef<Path>) -> Result<Vec<MoveString>>
{
    let contents = fs::read_to_string(path)?;
    contents.lines().filter(|line| !line.is_empty()).map(|line| line.parse::<MoveString>()).collect()
}
