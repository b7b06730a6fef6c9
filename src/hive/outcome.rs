//! Win/draw determination.
//!
//! Grounded in `examples/original_source/hive/game_engine/game_functions.py`'s win check: a
//! Queen counts as surrounded once all six of its neighbouring hexes are occupied, regardless
//! of whether the piece sitting there is itself buried under a stack.

use crate::prelude::*;

/// Whether `color`'s Queen has been placed and is fully surrounded.
pub fn has_lost(state: &GameState, color: Color) -> bool
{
    match state.queen_location(color)
    {
        | Some(hex) => hex::neighbours(hex).into_iter().all(|n| state.board().is_occupied(n)),
        | None => false,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The result of a finished (or in-progress) game.
pub enum Outcome
{
    Win(Color),
    /// Both Queens are surrounded simultaneously, or the game has not yet concluded.
    Draw,
}

/// The winner of the game in `state`, or `None` if the game has not (yet) resolved to exactly
/// one winner — this includes a mutual surround, which this ruleset treats as "no winner"
/// rather than adjudicating a draw one way or the other.
pub fn winner(state: &GameState) -> Option<Color>
{
    let white_lost = has_lost(state, Color::White);
    let black_lost = has_lost(state, Color::Black);

    match (white_lost, black_lost)
    {
        | (true, false) => Some(Color::Black),
        | (false, true) => Some(Color::White),
        | _ => None,
    }
}

/// Classifies `state` as a win for one color or a draw, folding together `winner` and the
/// mutual-surround case `winner` alone leaves as `None`.
pub fn outcome(state: &GameState) -> Outcome
{
    match winner(state)
    {
        | Some(color) => Outcome::Win(color),
        | None => Outcome::Draw,
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn filler(color: Color, number: u8) -> Piece
    {
        Piece { color, kind: PieceKind::Ant, number }
    }

    #[test]
    fn a_queen_with_no_location_has_not_lost()
    {
        let state = GameState::initial(Options::default());
        assert!(!has_lost(&state, Color::White));
        assert_eq!(winner(&state), None);
        assert_eq!(outcome(&state), Outcome::Draw);
    }

    #[test]
    fn a_fully_surrounded_queen_has_lost()
    {
        let queen = Hex::ORIGIN;
        let mut board = Board::new().with_pushed(queen, Piece { color: Color::White, kind: PieceKind::Queen, number: 1 });
        for (i, n) in hex::neighbours(queen).into_iter().enumerate()
        {
            board = board.with_pushed(n, filler(Color::Black, (i % 3 + 1) as u8));
        }

        let state = GameState::for_test(board, [Some(queen), None]);
        assert!(has_lost(&state, Color::White));
        assert_eq!(winner(&state), Some(Color::Black));
    }

    #[test]
    fn a_partially_surrounded_queen_has_not_lost()
    {
        let queen = Hex::ORIGIN;
        let mut board = Board::new().with_pushed(queen, Piece { color: Color::White, kind: PieceKind::Queen, number: 1 });
        for (i, n) in hex::neighbours(queen).into_iter().take(5).enumerate()
        {
            board = board.with_pushed(n, filler(Color::Black, (i % 3 + 1) as u8));
        }

        let state = GameState::for_test(board, [Some(queen), None]);
        assert!(!has_lost(&state, Color::White));
        assert_eq!(winner(&state), None);
    }

    #[test]
    fn a_mutual_surround_has_no_winner()
    {
        let white_queen = Hex::ORIGIN;
        let black_queen = Hex::new(20, 0);

        let mut board = Board::new()
            .with_pushed(white_queen, Piece { color: Color::White, kind: PieceKind::Queen, number: 1 })
            .with_pushed(black_queen, Piece { color: Color::Black, kind: PieceKind::Queen, number: 1 });

        for (i, n) in hex::neighbours(white_queen).into_iter().enumerate()
        {
            board = board.with_pushed(n, filler(Color::Black, (i % 3 + 1) as u8));
        }
        for (i, n) in hex::neighbours(black_queen).into_iter().enumerate()
        {
            board = board.with_pushed(n, filler(Color::White, (i % 3 + 1) as u8));
        }

        let state = GameState::for_test(board, [Some(white_queen), Some(black_queen)]);
        assert!(has_lost(&state, Color::White));
        assert!(has_lost(&state, Color::Black));
        assert_eq!(winner(&state), None);
    }
}
