use std::collections::{HashSet, VecDeque};

use crate::hive::board::topology;
use crate::prelude::*;

/// Every hex reachable by an arbitrary-length chain of ground-level slides around the lifted
/// hive, excluding `origin` itself.
pub fn destinations(board: &Board, origin: Hex) -> Vec<Hex>
{
    let lifted = board.with_popped(origin);
    let mut seen = HashSet::from([origin]);
    let mut queue = VecDeque::from([origin]);

    while let Some(at) = queue.pop_front()
    {
        for dest in lifted.empty_adjacent(at)
        {
            if seen.contains(&dest)
            {
                continue;
            }
            if lifted.neighbours_with_piece(dest).is_empty()
            {
                continue;
            }
            if !topology::can_slide(&lifted, at, dest, 0)
            {
                continue;
            }

            seen.insert(dest);
            queue.push_back(dest);
        }
    }

    seen.remove(&origin);
    seen.into_iter().collect()
}
