use crate::prelude::*;

/// For each of the six directions, jumps in a straight line over any occupied hexes and lands
/// on the first empty one. A direction with no adjacent piece offers no jump at all.
pub fn destinations(board: &Board, origin: Hex) -> Vec<Hex>
{
    let lifted = board.with_popped(origin);

    Direction::all()
        .into_iter()
        .filter_map(|direction| {
            let mut cursor = origin + direction;
            if !lifted.is_occupied(cursor)
            {
                return None;
            }
            while lifted.is_occupied(cursor)
            {
                cursor = cursor + direction;
            }
            Some(cursor)
        })
        .collect()
}
