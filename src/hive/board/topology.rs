use std::collections::{HashSet, VecDeque};

use crate::prelude::*;

/// BFS over occupied neighbours starting from `start`, skipping any hex in `ignore`.
/// Returns the set of hexes reachable from `start` without leaving the hive.
pub fn connected_component(board: &Board, start: Hex, ignore: &HashSet<Hex>) -> HashSet<Hex>
{
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(start);
    seen.insert(start);

    while let Some(h) = queue.pop_front()
    {
        for n in board.neighbours_with_piece(h)
        {
            if ignore.contains(&n) || seen.contains(&n)
            {
                continue;
            }
            seen.insert(n);
            queue.push_back(n);
        }
    }

    seen
}

/// True iff every occupied hex not in `ignore` is reachable from every other, i.e. the hive
/// (minus the ignored hexes) forms a single connected component.
pub fn all_occupied_connected(board: &Board, ignore: &HashSet<Hex>) -> bool
{
    let occupied: HashSet<Hex> = board.occupied().filter(|h| !ignore.contains(h)).collect();

    let Some(&start) = occupied.iter().next()
    else
    {
        return true;
    };

    connected_component(board, start, ignore) == occupied
}

/// True iff removing the top piece at `h` would leave the hive connected. A piece that is not
/// alone in its stack never pins the hive, since the pieces below it remain.
pub fn can_remove(board: &Board, h: Hex) -> bool
{
    if board.height(h) >= 2
    {
        return true;
    }

    let ignore = HashSet::from([h]);
    all_occupied_connected(board, &ignore)
}

/// Encodes the two-gate freedom-to-move rule for a ground-level slide between adjacent hexes
/// `from` and `to`. The slide is blocked iff both hexes shared-adjacent to `from` and `to` (the
/// "gates") have stacks strictly taller than `height_threshold`.
pub fn can_slide(board: &Board, from: Hex, to: Hex, height_threshold: usize) -> bool
{
    let direction = Direction::to(from, to).expect("can_slide requires adjacent hexes");
    let gate_1 = from + direction.clockwise();
    let gate_2 = from + direction.counterclockwise();

    !(board.height(gate_1) > height_threshold && board.height(gate_2) > height_threshold)
}
