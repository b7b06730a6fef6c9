use super::beetle;
use crate::prelude::*;

/// True iff a ground-level Mosquito at `origin` is touching another Mosquito — the mutual-lock
/// rule that disables movement entirely (both own-motion and Pillbug-style transfer). Only
/// applies at ground level; a Mosquito atop the hive behaves strictly as a Beetle regardless of
/// what is beneath it.
pub fn mutual_lock(board: &Board, origin: Hex) -> bool
{
    if board.height(origin) > 1
    {
        return false;
    }

    board
        .neighbours_with_piece(origin)
        .into_iter()
        .any(|n| board.top(n).map(|p| p.kind) == Some(PieceKind::Mosquito))
}

/// A Mosquito atop the hive moves strictly as a Beetle. At ground level, it copies the union of
/// every top-neighbour's own movement geometry, skipping other Mosquitoes (which contribute
/// nothing) and subject to the mutual-lock rule above.
pub fn destinations(board: &Board, origin: Hex) -> Vec<Hex>
{
    if board.height(origin) > 1
    {
        return beetle::destinations(board, origin);
    }

    if mutual_lock(board, origin)
    {
        return vec![];
    }

    let mut out = vec![];
    for n in board.neighbours_with_piece(origin)
    {
        let Some(neighbour) = board.top(n)
        else
        {
            continue;
        };
        if neighbour.kind == PieceKind::Mosquito
        {
            continue;
        }
        out.extend(super::destinations(neighbour.kind, board, origin));
    }
    out.sort_by_key(|h| (h.q, h.r));
    out.dedup();
    out
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
    fn copies_an_adjacent_grasshopper()
    {
        let board = Board::new()
            .with_pushed(Hex::new(0, 0), piece(PieceKind::Mosquito, Color::White))
            .with_pushed(Hex::new(2, 0), piece(PieceKind::Grasshopper, Color::Black))
            .with_pushed(Hex::new(4, 0), piece(PieceKind::Ant, Color::White));

        let dests = destinations(&board, Hex::new(0, 0));
        assert!(dests.contains(&Hex::new(6, 0)));
    }

    #[test]
    fn two_adjacent_mosquitoes_cannot_move()
    {
        let board = Board::new()
            .with_pushed(Hex::new(0, 0), piece(PieceKind::Mosquito, Color::White))
            .with_pushed(Hex::new(2, 0), piece(PieceKind::Mosquito, Color::Black));

        assert!(destinations(&board, Hex::new(0, 0)).is_empty());
    }
}
