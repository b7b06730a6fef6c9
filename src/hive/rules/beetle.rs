use crate::hive::board::topology;
use crate::prelude::*;

/// One step to any of the six neighbours, onto empty ground or on top of whatever is there.
///
/// A beetle already resting above the hive (height before lifting > 1) ignores the two-gate
/// check entirely — it is climbing over the stack, not squeezing along the ground. A beetle at
/// ground level sliding to another ground-level hex is gated exactly like the Queen, including
/// the same "destination still touches the hive" requirement (climbing onto an occupied
/// neighbour is always fine, since the occupied hex itself keeps the hive connected).
pub fn destinations(board: &Board, origin: Hex) -> Vec<Hex>
{
    let was_elevated = board.height(origin) > 1;
    let lifted = board.with_popped(origin);

    hex::neighbours(origin)
        .into_iter()
        .filter(|&dest| {
            if was_elevated
            {
                return true;
            }
            if lifted.height(dest) > 0
            {
                return true;
            }
            !lifted.neighbours_with_piece(dest).is_empty() && topology::can_slide(&lifted, origin, dest, 0)
        })
        .collect()
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn piece(kind: PieceKind, color: Color) -> Piece
    {
        Piece { color, kind, number: 1 }
    }

    #[test]
    fn climbs_onto_a_neighbouring_stack()
    {
        let board = Board::new()
            .with_pushed(Hex::new(0, 0), piece(PieceKind::Queen, Color::White))
            .with_pushed(Hex::new(-2, 0), piece(PieceKind::Ant, Color::Black))
            .with_pushed(Hex::new(2, 0), piece(PieceKind::Beetle, Color::White));

        let dests = destinations(&board, Hex::new(2, 0));
        assert!(dests.contains(&Hex::new(0, 0)));
    }

    #[test]
    fn descends_freely_from_a_stack()
    {
        let board = Board::new()
            .with_pushed(Hex::new(0, 0), piece(PieceKind::Queen, Color::White))
            .with_pushed(Hex::new(0, 0), piece(PieceKind::Beetle, Color::White));

        let dests = destinations(&board, Hex::new(0, 0));
        assert_eq!(dests.len(), 6);
    }

    #[test]
    fn a_ground_level_beetle_never_slides_off_into_isolation()
    {
        // Queen at (0,0), Beetle at (2,0): (4,0) is a neighbour of the beetle's own hex but
        // touches nothing else on the board, so landing there would strand the beetle away
        // from the rest of the hive.
        let board = Board::new()
            .with_pushed(Hex::new(0, 0), piece(PieceKind::Queen, Color::White))
            .with_pushed(Hex::new(2, 0), piece(PieceKind::Beetle, Color::White));

        let dests = destinations(&board, Hex::new(2, 0));
        assert!(!dests.contains(&Hex::new(4, 0)));
    }
}
