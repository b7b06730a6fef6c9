use std::collections::HashSet;

use crate::prelude::*;

/// Exactly three steps: two across the tops of neighbouring pieces, then one down to an empty
/// ground hex.
pub fn destinations(board: &Board, origin: Hex) -> Vec<Hex>
{
    let lifted = board.with_popped(origin);

    let s1: HashSet<Hex> = lifted.neighbours_with_piece(origin).into_iter().collect();

    let s2: HashSet<Hex> = s1
        .iter()
        .flat_map(|&h| lifted.neighbours_with_piece(h))
        .filter(|&h| h != origin)
        .collect();

    s2.iter()
        .flat_map(|&h| lifted.empty_adjacent(h))
        .filter(|&dest| dest != origin)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect()
}
