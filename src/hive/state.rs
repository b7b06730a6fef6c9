//! The immutable, replayable game-state chain.
//!
//! Grounded in `examples/original_source/hive/game_engine/game_state.py`: each `GameState` is a
//! value snapshot with a `parent` link, never mutated in place. A transition consumes a `Move`
//! and returns a brand new state; nothing here ever edits a `Board` or `Reserves` behind a
//! shared reference.

use std::rc::Rc;

use crate::hive::movegen;
use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A single ply: placing a reserve piece, sliding/hopping/climbing one already on the board, or
/// passing when no other move is available.
pub enum Move
{
    Placement
    {
        piece: Piece, dest: Hex
    },
    Motion
    {
        piece: Piece,
        from: Hex,
        from_index: usize,
        to: Hex,
        to_index: usize,
        acting_color: Color,
        pillbug_assist: bool,
    },
    Pass
    {
        acting_color: Color
    },
}

impl Move
{
    /// The color whose turn this move is played on — the piece's own color for a Placement or
    /// an unassisted Motion, but the acting Pillbug's owner when `pillbug_assist` is set.
    pub fn acting_color(&self) -> Color
    {
        match self
        {
            | Move::Placement { piece, .. } => piece.color,
            | Move::Motion { acting_color, .. } => *acting_color,
            | Move::Pass { acting_color } => *acting_color,
        }
    }
}

impl std::fmt::Display for Move
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            | Move::Placement { piece, dest } => write!(f, "{} -> {}", piece, dest),
            | Move::Motion { piece, from, to, pillbug_assist, .. } => write!(
                f,
                "{} {} -> {}{}",
                piece,
                from,
                to,
                if *pillbug_assist { " (pillbug-assisted)" } else { "" }
            ),
            | Move::Pass { acting_color } => write!(f, "{} passes", acting_color),
        }
    }
}

#[derive(Clone, Debug)]
/// A persistent snapshot of one point in a game's history.
///
/// *Invariants*: `turn_count[c]` is the number of moves `c` has made reachable by walking
/// `parent`; `queen_location[c]` is consistent with `board`; by the end of `c`'s fourth turn its
/// Queen must be on the board.
pub struct GameState
{
    board:            Board,
    reserves:         Reserves,
    turn_count:       [u16; 2],
    queen_location:   [Option<Hex>; 2],
    current_turn:     Color,
    last_move:        Option<Move>,
    last_moved_piece: Option<Piece>,
    parent:           Option<Rc<GameState>>,
}

impl GameState
{
    /// Builds the root state: an empty board, full reserves, White to move, no history.
    pub fn initial(options: Options) -> Rc<GameState>
    {
        Rc::new(GameState {
            board: Board::new(),
            reserves: Reserves::new(options),
            turn_count: [0, 0],
            queen_location: [None, None],
            current_turn: Color::White,
            last_move: None,
            last_moved_piece: None,
            parent: None,
        })
    }

    pub fn board(&self) -> &Board
    {
        &self.board
    }

    pub fn reserves(&self) -> &Reserves
    {
        &self.reserves
    }

    pub fn turn_count(&self, color: Color) -> u16
    {
        self.turn_count[color as usize]
    }

    pub fn queen_location(&self, color: Color) -> Option<Hex>
    {
        self.queen_location[color as usize]
    }

    pub fn current_turn(&self) -> Color
    {
        self.current_turn
    }

    pub fn last_move(&self) -> Option<Move>
    {
        self.last_move
    }

    pub fn last_moved_piece(&self) -> Option<Piece>
    {
        self.last_moved_piece
    }

    pub fn parent(&self) -> Option<&Rc<GameState>>
    {
        self.parent.as_ref()
    }

    /// Every legal move for `color` in this position. Never raises; an illegal candidate is
    /// simply omitted rather than causing an error.
    pub fn legal_moves(&self, color: Color) -> Vec<Move>
    {
        movegen::legal_moves(self, color)
    }

    /// The piece a pillbug ban would currently forbid from moving, if any: whatever was moved
    /// last turn, provided that move was pillbug-assisted.
    pub fn banned_piece(&self) -> Option<Piece>
    {
        match self.last_move
        {
            | Some(Move::Motion { pillbug_assist: true, piece, .. }) => Some(piece),
            | _ => None,
        }
    }

    /// Returns a copy of this state with `current_turn` overridden, used only to apply a replay
    /// store record's own claimed turn (see [`crate::hive::notation::replay::replay`]) — the
    /// hint overrides whose move it is next rather than being cross-checked against it.
    pub(crate) fn with_current_turn(&self, color: Color) -> GameState
    {
        GameState {
            current_turn: color,
            ..self.clone()
        }
    }

    #[cfg(test)]
    /// Builds an arbitrary state directly from a board, bypassing `apply`'s legality checks.
    /// Only for exercising board-shape-dependent logic (e.g. surround detection) that would
    /// otherwise require playing out a long, incidental move sequence.
    pub(crate) fn for_test(board: Board, queen_location: [Option<Hex>; 2]) -> GameState
    {
        GameState {
            board,
            reserves: Reserves::new(Options::default()),
            turn_count: [0, 0],
            queen_location,
            current_turn: Color::White,
            last_move: None,
            last_moved_piece: None,
            parent: None,
        }
    }

    #[cfg(test)]
    /// Returns a copy of this state with `last_moved_piece` overridden, for driving the
    /// Pillbug-ban filters without replaying whatever move sequence would have produced it.
    pub(crate) fn with_last_moved_piece(&self, piece: Piece) -> GameState
    {
        GameState {
            last_moved_piece: Some(piece),
            ..self.clone()
        }
    }
}

/// Applies `mv` to `state`, returning the resulting successor.
///
/// `mv` must appear in `state.legal_moves(mv.acting_color())`; direct construction of a `Move`
/// that does not is defined behavior, but it raises [`Kind::InvalidPlacement`] or
/// [`Kind::InvalidMove`] rather than silently doing something else.
pub fn apply(state: &Rc<GameState>, mv: Move) -> Result<Rc<GameState>>
{
    let legal = state.legal_moves(mv.acting_color());
    if !legal.contains(&mv)
    {
        if let Move::Placement { piece, .. } = mv
        {
            let must_play_queen = state.turn_count(piece.color) >= 3 && state.queen_location(piece.color).is_none();
            if must_play_queen && piece.kind != PieceKind::Queen
            {
                return Err(Error::new(Kind::NoQueen, format!("{} must place its Queen by the end of turn 4", piece.color)));
            }
        }

        let kind = match mv
        {
            | Move::Placement { .. } => Kind::InvalidPlacement,
            | Move::Motion { .. } | Move::Pass { .. } => Kind::InvalidMove,
        };
        return Err(Error::new(kind, format!("{} is not a legal move in this position", mv)));
    }

    let mut next = (**state).clone();
    next.parent = Some(state.clone());
    next.last_move = Some(mv);

    match mv
    {
        | Move::Placement { piece, dest } =>
        {
            next.reserves.take(piece.color, piece.kind);
            next.board = next.board.with_pushed(dest, piece);
            next.turn_count[piece.color as usize] += 1;
            if piece.kind == PieceKind::Queen
            {
                next.queen_location[piece.color as usize] = Some(dest);
            }
            next.last_moved_piece = Some(piece);
            next.current_turn = piece.color.flip();
        }
        | Move::Motion { piece, from, to, acting_color, .. } =>
        {
            next.board = next.board.with_popped(from).with_pushed(to, piece);
            next.turn_count[acting_color as usize] += 1;
            if piece.kind == PieceKind::Queen
            {
                next.queen_location[piece.color as usize] = Some(to);
            }
            next.last_moved_piece = Some(piece);
            next.current_turn = acting_color.flip();
        }
        | Move::Pass { acting_color } =>
        {
            next.turn_count[acting_color as usize] += 1;
            next.last_moved_piece = None;
            next.current_turn = acting_color.flip();
        }
    }

    Ok(Rc::new(next))
}
