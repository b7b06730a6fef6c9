//! Player-level move enumeration: combines per-piece geometry, placement rules, Pillbug
//! transfers, and the Pillbug-ban post-filter into the set of moves available to one color.
//!
//! Grounded in `examples/original_source/hive/game_engine/game_functions.py`
//! (`get_valid_moves`) for the overall shape: placements first, then per-piece motions, then
//! Pillbug transfers, then the ban filter, falling back to a forced Pass.

use std::collections::HashSet;

use crate::hive::rules;
use crate::hive::state::{GameState, Move};
use crate::prelude::*;

/// Every legal move available to `color` in `state`. Never empty — falls back to a single
/// `Pass` when no Placement or Motion is available.
pub fn legal_moves(state: &GameState, color: Color) -> Vec<Move>
{
    let board = state.board();
    let must_play_queen = state.turn_count(color) >= 3 && state.queen_location(color).is_none();

    let mut moves = Vec::new();

    if !must_play_queen && state.queen_location(color).is_some()
    {
        for hex in board.occupied().collect::<Vec<_>>()
        {
            let Some(top) = board.top(hex)
            else
            {
                continue;
            };
            if top.color != color
            {
                continue;
            }

            for dest in rules::destinations(top.kind, board, hex)
            {
                moves.push(Move::Motion {
                    piece: top,
                    from: hex,
                    from_index: board.height(hex) - 1,
                    to: dest,
                    to_index: board.height(dest),
                    acting_color: color,
                    pillbug_assist: false,
                });
            }

            if acts_as_pillbug(board, hex, top)
            {
                moves.extend(rules::transfers(board, hex, color));
            }
        }
    }

    moves.extend(placements(state, color, must_play_queen));

    if let Some(banned) = state.banned_piece()
    {
        moves.retain(|mv| !matches!(mv, Move::Motion { piece, .. } if *piece == banned));
    }

    // A Pillbug transfer may never move whatever piece moved last turn, regardless of whether
    // that last move was itself pillbug-assisted — a stricter, mechanism-agnostic rule than the
    // ban above.
    if let Some(last_moved) = state.last_moved_piece()
    {
        moves.retain(|mv| !matches!(mv, Move::Motion { piece, pillbug_assist: true, .. } if *piece == last_moved));
    }

    if moves.is_empty()
    {
        moves.push(Move::Pass { acting_color: color });
    }

    moves
}

/// Whether the piece at `hex` can use the Pillbug's transfer ability: it either is a Pillbug,
/// or is a ground-level, non-mutual-locked Mosquito touching one.
fn acts_as_pillbug(board: &Board, hex: Hex, top: Piece) -> bool
{
    match top.kind
    {
        | PieceKind::Pillbug => true,
        | PieceKind::Mosquito =>
        {
            board.height(hex) == 1
                && !rules::mutual_lock(board, hex)
                && board.neighbours_with_piece(hex).into_iter().any(|n| board.top(n).map(|p| p.kind) == Some(PieceKind::Pillbug))
        }
        | _ => false,
    }
}

fn placements(state: &GameState, color: Color, must_play_queen: bool) -> Vec<Move>
{
    let board = state.board();
    let is_first = state.turn_count(color) == 0;
    let dests = placeable_hexes(board, color, is_first);
    let reserves = state.reserves();

    let mut out = vec![];

    if must_play_queen
    {
        if let Some(piece) = reserves.next(color, PieceKind::Queen)
        {
            out.extend(dests.iter().map(|&dest| Move::Placement { piece, dest }));
        }
        return out;
    }

    for kind in PieceKind::all()
    {
        if let Some(piece) = reserves.next(color, kind)
        {
            out.extend(dests.iter().map(|&dest| Move::Placement { piece, dest }));
        }
    }

    out
}

/// Every empty hex a new piece of `color` could land on.
fn placeable_hexes(board: &Board, color: Color, is_first: bool) -> Vec<Hex>
{
    if board.occupied().next().is_none()
    {
        return vec![Hex::ORIGIN];
    }

    let mut candidates: HashSet<Hex> = HashSet::new();
    for occ in board.occupied()
    {
        for n in hex::neighbours(occ)
        {
            if !board.is_occupied(n)
            {
                candidates.insert(n);
            }
        }
    }

    if is_first
    {
        return candidates.into_iter().collect();
    }

    candidates
        .into_iter()
        .filter(|&h| hex::neighbours(h).into_iter().all(|n| board.top(n).map_or(true, |p| p.color == color)))
        .collect()
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn the_opening_move_has_exactly_one_destination()
    {
        let state = GameState::initial(Options::default());
        let moves = legal_moves(&state, Color::White);
        let placements: Vec<_> = moves
            .iter()
            .filter_map(|mv| match mv
            {
                | Move::Placement { dest, .. } => Some(*dest),
                | _ => None,
            })
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        assert_eq!(placements, vec![Hex::ORIGIN]);
    }

    #[test]
    fn must_play_queen_by_the_fourth_turn()
    {
        use crate::hive::state::apply;

        let mut state = GameState::initial(Options::default());
        for _ in 0..3
        {
            let piece = state.reserves().next(state.current_turn(), PieceKind::Ant).unwrap();
            let dest = match legal_moves(&state, state.current_turn())
                .into_iter()
                .find_map(|mv| match mv
                {
                    | Move::Placement { piece: p, dest } if p == piece => Some(dest),
                    | _ => None,
                })
            {
                | Some(d) => d,
                | None => break,
            };
            state = apply(&state, Move::Placement { piece, dest }).unwrap();
        }

        let moves = legal_moves(&state, state.current_turn());
        assert!(moves.iter().all(|mv| matches!(mv, Move::Placement { piece, .. } if piece.kind == PieceKind::Queen)));
    }

    #[test]
    fn pass_is_exclusive()
    {
        let state = GameState::initial(Options::default());
        let moves = legal_moves(&state, Color::White);
        assert!(!moves.iter().any(|mv| matches!(mv, Move::Pass { .. })));
    }

    #[test]
    fn a_pillbug_transfer_cannot_target_whatever_moved_last_turn_even_unassisted()
    {
        let white_queen = Piece {
            color: Color::White,
            kind: PieceKind::Queen,
            number: 1,
        };
        let black_pillbug = Piece {
            color: Color::Black,
            kind: PieceKind::Pillbug,
            number: 1,
        };
        let black_queen = Piece {
            color: Color::Black,
            kind: PieceKind::Queen,
            number: 1,
        };
        let white_ant = Piece {
            color: Color::White,
            kind: PieceKind::Ant,
            number: 1,
        };

        let board = Board::new()
            .with_pushed(Hex::new(0, 0), white_queen)
            .with_pushed(Hex::new(2, 0), black_pillbug)
            .with_pushed(Hex::new(3, -1), black_queen)
            // The Ant sits at a neighbour of the Pillbug, having arrived there last turn by an
            // ordinary, unassisted slide.
            .with_pushed(Hex::new(1, -1), white_ant);

        let state = GameState::for_test(board, [Some(Hex::new(0, 0)), Some(Hex::new(3, -1))]).with_last_moved_piece(white_ant);

        let moves = legal_moves(&state, Color::Black);
        assert!(!moves.iter().any(|mv| matches!(mv, Move::Motion { piece, pillbug_assist: true, .. } if *piece == white_ant)));
    }
}
