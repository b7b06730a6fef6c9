//! Per-species move geometry.
//!
//! Every function here is pure: given a board and the hex a piece currently occupies, it
//! returns the set of hexes that piece could slide, hop, or climb to. Callers are expected to
//! have already confirmed the piece named at `origin` is the top of its stack; these functions
//! treat `origin`'s occupant as given.
//!
//! Grounded in `examples/original_source/hive/game_engine/moves.py`, one function per bug.

use crate::hive::board::topology;
use crate::prelude::*;

mod ant;
mod beetle;
mod grasshopper;
mod ladybug;
mod mosquito;
mod pillbug;
mod queen;
mod spider;

pub use mosquito::mutual_lock;
pub use pillbug::transfers;

/// Returns every destination hex a piece of `kind` sitting at `origin` could move to, as if it
/// were the top of `origin`'s stack. Applies the shared one-hive precondition (a piece that
/// would disconnect the hive by leaving `origin` has no destinations) before dispatching to the
/// per-species geometry.
pub fn destinations(kind: PieceKind, board: &Board, origin: Hex) -> Vec<Hex>
{
    if !topology::can_remove(board, origin)
    {
        return vec![];
    }

    match kind
    {
        | PieceKind::Queen => queen::destinations(board, origin),
        | PieceKind::Beetle => beetle::destinations(board, origin),
        | PieceKind::Grasshopper => grasshopper::destinations(board, origin),
        | PieceKind::Spider => spider::destinations(board, origin),
        | PieceKind::Ant => ant::destinations(board, origin),
        | PieceKind::Ladybug => ladybug::destinations(board, origin),
        | PieceKind::Pillbug => queen::destinations(board, origin),
        | PieceKind::Mosquito => mosquito::destinations(board, origin),
    }
}
