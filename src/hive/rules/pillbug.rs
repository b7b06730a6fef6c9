use crate::hive::board::topology;
use crate::hive::state::Move;
use crate::prelude::*;

/// Generates the Pillbug's transfer moves: picking up a single-height neighbour and setting it
/// down on another empty neighbour, without the transferred piece ever leaving ground level.
///
/// `pillbug_hex` need not hold an actual Pillbug — a Mosquito copying a ground-level Pillbug
/// neighbour calls this with its own hex, per §4.4's "Mosquito copies Pillbug" rule. `acting`
/// is the color of whoever owns the pillbug (or the mimicking mosquito); it becomes the
/// transfer Motion's `acting_color`, which may differ from the moved piece's own color.
pub fn transfers(board: &Board, pillbug_hex: Hex, acting: Color) -> Vec<Move>
{
    let height_threshold = board.height(pillbug_hex);
    let neighbours = hex::neighbours(pillbug_hex);

    // Iterate over the cartesian product of the pillbug's own neighbours, pairing every
    // candidate pickup with every candidate destination.
    itertools::iproduct!(neighbours.iter(), neighbours.iter())
        .filter(|(&n, &d)| n != d && board.height(n) == 1 && board.height(d) == 0)
        .filter(|(&n, _)| topology::can_remove(board, n) && topology::can_slide(board, n, pillbug_hex, height_threshold))
        .filter_map(|(&n, &d)| {
            let after_lift = board.with_popped(n);
            if !topology::can_slide(&after_lift, pillbug_hex, d, height_threshold)
            {
                return None;
            }

            Some(Move::Motion {
                piece: board.top(n).expect("height 1 implies a top piece"),
                from: n,
                from_index: 0,
                to: d,
                to_index: 0,
                acting_color: acting,
                pillbug_assist: true,
            })
        })
        .collect()
}
