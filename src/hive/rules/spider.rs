use std::collections::HashSet;

use crate::hive::board::topology;
use crate::prelude::*;

/// The union of endpoints of every length-3, non-self-intersecting ground-level slide path
/// starting at `origin`, with `origin` lifted off the board for the whole walk.
pub fn destinations(board: &Board, origin: Hex) -> Vec<Hex>
{
    let lifted = board.with_popped(origin);
    let mut visited = HashSet::from([origin]);
    let mut ends = HashSet::new();

    walk(&lifted, origin, &mut visited, 3, &mut ends);
    ends.remove(&origin);
    ends.into_iter().collect()
}

fn walk(board: &Board, at: Hex, visited: &mut HashSet<Hex>, remaining: u8, ends: &mut HashSet<Hex>)
{
    if remaining == 0
    {
        ends.insert(at);
        return;
    }

    for dest in board.empty_adjacent(at)
    {
        if visited.contains(&dest)
        {
            continue;
        }
        if board.neighbours_with_piece(dest).is_empty()
        {
            continue;
        }
        if !topology::can_slide(board, at, dest, 0)
        {
            continue;
        }

        visited.insert(dest);
        walk(board, dest, visited, remaining - 1, ends);
        visited.remove(&dest);
    }
}
