use crate::hive::board::topology;
use crate::prelude::*;

/// One slide step to an empty neighbour that touches the hive and clears the two-gate check.
///
/// Shared verbatim by the Pillbug's own motion, which is Queen-like.
pub fn destinations(board: &Board, origin: Hex) -> Vec<Hex>
{
    let lifted = board.with_popped(origin);

    lifted
        .empty_adjacent(origin)
        .into_iter()
        .filter(|&dest| !lifted.neighbours_with_piece(dest).is_empty())
        .filter(|&dest| topology::can_slide(&lifted, origin, dest, 0))
        .collect()
}
