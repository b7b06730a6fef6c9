use regex::Regex;

use crate::hive::state::Move;
use crate::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A syntactically-valid move string: `"pass"`, a bare piece (only meaningful as the opening
/// placement), or a piece followed by a relative reference to another.
///
/// Syntactic validity doesn't imply the move is legal in any particular position — that
/// requires a [`GameState`] to resolve against, via [`parse_move`].
pub struct MoveString(pub(crate) String);

impl FromStr for MoveString
{
    type Err = Error;
    fn from_str(s: &str) -> std::prelude::v1::Result<Self, Self::Err>
    {
        if s == "pass"
        {
            return Ok(MoveString(s.into()));
        }

        let re = Regex::new(r"^(?<src>(w|b)[A-Z][1-3]?)( (?<dest>.*))?$").unwrap();
        let Some(caps) = re.captures(s)
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        let piece = caps["src"].parse::<Piece>();
        let Ok(piece) = piece
        else
        {
            let err = piece.unwrap_err();
            return Err(err.chain_parse::<Self>(s.into()));
        };

        if let Some(next_to_str) = caps.name("dest")
        {
            let next_to_try = next_to_str.as_str().parse::<NextTo>();
            let Ok(next_to) = next_to_try
            else
            {
                let err = next_to_try.unwrap_err();
                return Err(err.chain_parse::<Self>(s.into()));
            };

            if piece == next_to.piece
            {
                let err_msg = format!("Source and destination pieces must not match ({}, {}).", piece, next_to.piece);
                let err = Error::new(Kind::MalformedNotation, err_msg);
                return Err(err.chain_parse::<Self>(s.into()));
            }
        }

        Ok(MoveString(s.to_owned()))
    }
}

impl AsRef<str> for MoveString
{
    fn as_ref(&self) -> &str
    {
        self.0.as_str()
    }
}

impl std::fmt::Display for MoveString
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Represents a relative location (relative to another piece).
pub struct NextTo
{
    pub piece:     Piece,
    pub direction: Option<Direction>,
}

impl FromStr for NextTo
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let re = Regex::new(r"^(?<l>(?<dirl>[-/\\])(?<piecel>[A-Za-z1-3]{2,3}))$|^(?<r>(?<piecer>[A-Za-z1-3]{2,3})(?<dirr>[-/\\]))$|^(?<n>(?<piecen>[A-Za-z1-3]{2,3}))$").unwrap();
        let Some(caps) = re.captures(s)
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        if caps.name("n").is_some()
        {
            let piece = caps["piecen"].parse::<Piece>();
            let Ok(piece) = piece
            else
            {
                let err = piece.unwrap_err();
                return Err(err.chain_parse::<Self>(s.into()));
            };

            Ok(NextTo { piece, direction: None })
        }
        else
        {
            let on_left = caps.name("l").is_some();
            let piece_capture = if on_left { "piecel" } else { "piecer" };
            let dir_capture = if on_left { "dirl" } else { "dirr" };

            let piece = caps[piece_capture].parse::<Piece>();
            let Ok(piece) = piece
            else
            {
                let err = piece.unwrap_err();
                return Err(err.chain_parse::<Self>(s.into()));
            };

            let mut direction = None;
            if let Some(dir) = caps.name(dir_capture)
            {
                direction = Some(Direction::parse(dir.as_str(), on_left)?);
            }

            Ok(NextTo { piece, direction })
        }
    }
}

impl std::fmt::Display for NextTo
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let piece = self.piece;
        match self.direction
        {
            | Some(d) => match d.is_west()
            {
                | true => write!(f, "{}{}", d, piece),
                | false => write!(f, "{}{}", piece, d),
            },
            | None => write!(f, "{}", piece),
        }
    }
}

/// Resolves a syntactically-valid move string against a position, producing the engine-level
/// [`Move`] it denotes.
///
/// Disambiguates against `state.legal_moves(state.current_turn())`: when a (piece,
/// destination) pair matches both an ordinary motion and a Pillbug-assisted transfer, the
/// ordinary motion wins — a player can always phrase a move through its own geometry when
/// that's also legal, reserving the assisted reading for when it's the only option.
pub fn parse_move(state: &GameState, text: &str) -> Result<Move>
{
    let movestr = text.parse::<MoveString>()?;
    translate(state, &movestr).map_err(|err| err.chain_parse::<MoveString>(movestr.0.clone()))
}

pub(crate) fn translate(state: &GameState, movestr: &MoveString) -> Result<Move>
{
    if movestr.0 == "pass"
    {
        return Ok(Move::Pass { acting_color: state.current_turn() });
    }

    let mut parts = movestr.0.split_terminator(' ').filter(|s| !s.is_empty());
    let piece = parts.next().unwrap().parse::<Piece>()?;
    let next_to = parts.next().map(|s| s.parse::<NextTo>()).transpose()?;

    let legal = state.legal_moves(state.current_turn());

    if let Some(next_to) = next_to
    {
        let anchor = state
            .board()
            .locate(next_to.piece)
            .ok_or_else(|| Error::new(Kind::UnknownReference, format!("{} is not on the board.", next_to.piece)))?;

        // No indicator at all means "beetle-on-stack": the destination is the referenced
        // piece's own hex, not one of its neighbours. This only ever resolves to a legal Motion
        // (a beetle or beetle-acting mosquito climbing); it can never match a Placement, since
        // a placement's destination is always empty and `anchor` by definition is not.
        let dest = match next_to.direction
        {
            | Some(d) => anchor + d,
            | None => anchor,
        };

        let mut candidates: Vec<Move> = legal
            .into_iter()
            .filter(|mv| match mv
            {
                | Move::Placement { piece: p, dest: d } => *p == piece && *d == dest,
                | Move::Motion { piece: p, to, .. } => *p == piece && *to == dest,
                | Move::Pass { .. } => false,
            })
            .collect();

        if candidates.is_empty()
        {
            return Err(Error::new(Kind::InvalidMove, format!("{} has no legal move to {}.", piece, dest)));
        }

        candidates.sort_by_key(|mv| matches!(mv, Move::Motion { pillbug_assist: true, .. }));
        Ok(candidates.remove(0))
    }
    else if state.board().occupied().next().is_none()
    {
        legal
            .into_iter()
            .find(|mv| matches!(mv, Move::Placement { piece: p, dest } if *p == piece && *dest == Hex::ORIGIN))
            .ok_or_else(|| Error::new(Kind::InvalidPlacement, format!("{} cannot open the game.", piece)))
    }
    else
    {
        Err(Error::new(Kind::MalformedNotation, "Omitting the destination is only valid for the opening placement.".into()))
    }
}

/// Renders an engine-level [`Move`] back into notation, relative to the state it was played
/// from (i.e. the position *before* the move is applied).
pub fn format_move(state: &GameState, mv: &Move) -> MoveString
{
    match mv
    {
        | Move::Pass { .. } => MoveString("pass".into()),
        | Move::Placement { piece, dest } => match reference_for(state.board(), *dest, None)
        {
            | Some(next_to) => MoveString(format!("{} {}", piece, next_to)),
            | None => MoveString(piece.to_string()),
        },
        | Move::Motion { piece, to, from, .. } =>
        {
            // Climbing onto an occupied hex is rendered as a direction-less beetle-on-stack
            // reference to whatever already sits there, never as a neighbour-relative one.
            if let Some(occupant) = state.board().top(*to)
            {
                MoveString(format!("{} {}", piece, NextTo { piece: occupant, direction: None }))
            }
            else
            {
                match reference_for(state.board(), *to, Some(*from))
                {
                    | Some(next_to) => MoveString(format!("{} {}", piece, next_to)),
                    | None => MoveString(piece.to_string()),
                }
            }
        }
    }
}

/// Picks any occupied neighbour of `dest` (other than `exclude`, the moving piece's own former
/// hex) to describe `dest` relative to.
///
/// Scans clockwise starting from East, not `Direction::all()`'s own NW-first order, so that two
/// references to the same destination always resolve to the same reference piece — golden
/// replays depend on this being deterministic.
fn reference_for(board: &Board, dest: Hex, exclude: Option<Hex>) -> Option<NextTo>
{
    if board.occupied().next().is_none()
    {
        return None;
    }

    const CLOCKWISE_FROM_EAST: [Direction; 6] =
        [Direction::East, Direction::Southeast, Direction::Southwest, Direction::West, Direction::Northwest, Direction::Northeast];

    for d in CLOCKWISE_FROM_EAST
    {
        let anchor = dest + d.inverse();
        if Some(anchor) == exclude
        {
            continue;
        }
        if let Some(piece) = board.top(anchor)
        {
            return Some(NextTo { piece, direction: Some(d) });
        }
    }

    None
}

/// Whether `mv`, played from `state`'s parent, was (or could only have been) a Pillbug-assisted
/// transfer rather than the piece's own motion.
///
/// Grounded line-for-line in `moves.is_pillbug_move` from the original engine: a Motion already
/// flagged `pillbug_assist` always counts. Otherwise, it counts when some Pillbug or
/// Pillbug-acting Mosquito sat adjacent to both the source and destination hexes, *and* either
/// the moved piece doesn't belong to the color that made the move, or that piece could not have
/// reached `to` under its own geometry from the position it started in. This lets tooling
/// classify a [`Move`] built by hand (not sourced from [`GameState::legal_moves`], which always
/// carries the flag already) after the fact.
pub fn is_pillbug_move(state: &GameState, mv: &Move) -> bool
{
    let Move::Motion { piece, from, to, acting_color, pillbug_assist } = *mv
    else
    {
        return false;
    };

    if pillbug_assist
    {
        return true;
    }

    let Some(parent) = state.parent()
    else
    {
        return false;
    };
    let board = parent.board();

    let assisted_by = hex::neighbours(from).into_iter().any(|p| {
        hex::neighbours(to).contains(&p)
            && board.top(p).is_some_and(|occupant| {
                occupant.kind == PieceKind::Pillbug || (occupant.kind == PieceKind::Mosquito && !crate::hive::rules::mutual_lock(board, p))
            })
    });

    if !assisted_by
    {
        return false;
    }

    piece.color != acting_color || !crate::hive::rules::destinations(piece.kind, board, from).contains(&to)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn pass_round_trips()
    {
        let parsed = "pass".parse::<MoveString>().unwrap();
        assert_eq!(parsed.as_ref(), "pass");
    }

    #[test]
    fn rejects_a_move_referencing_itself()
    {
        assert!("wQ wQ".parse::<MoveString>().is_err());
    }

    #[test]
    fn the_opening_placement_parses_without_a_reference()
    {
        let state = GameState::initial(Options::default());
        let piece = state.reserves().next(Color::White, PieceKind::Ant).unwrap();
        let mv = parse_move(&state, &piece.to_string()).unwrap();
        assert!(matches!(mv, Move::Placement { dest, .. } if dest == Hex::ORIGIN));
    }

    #[test]
    fn a_formatted_placement_reparses_to_the_same_move()
    {
        let state = GameState::initial(Options::default());
        let piece = state.reserves().next(Color::White, PieceKind::Ant).unwrap();
        let mv = Move::Placement { piece, dest: Hex::ORIGIN };
        let text = format_move(&state, &mv);
        let reparsed = parse_move(&state, text.as_ref()).unwrap();
        assert_eq!(reparsed, mv);
    }

    #[test]
    fn beetle_on_stack_parses_with_no_direction_indicator()
    {
        let state = GameState::initial(Options::default());
        let white_queen = state.reserves().next(Color::White, PieceKind::Queen).unwrap();
        let state = crate::hive::state::apply(&state, Move::Placement { piece: white_queen, dest: Hex::ORIGIN }).unwrap();

        let black_ant = state.reserves().next(Color::Black, PieceKind::Ant).unwrap();
        let state = crate::hive::state::apply(&state, Move::Placement { piece: black_ant, dest: Hex::new(-2, 0) }).unwrap();

        let white_beetle = state.reserves().next(Color::White, PieceKind::Beetle).unwrap();
        let state = crate::hive::state::apply(
            &state,
            Move::Placement {
                piece: white_beetle,
                dest:  Hex::new(2, 0),
            },
        )
        .unwrap();

        let mv = parse_move(&state, &format!("{} {}", white_beetle, white_queen)).unwrap();
        assert!(matches!(mv, Move::Motion { to, .. } if to == Hex::ORIGIN));
    }

    #[test]
    fn a_climb_formats_without_a_direction_indicator()
    {
        let board = Board::new()
            .with_pushed(
                Hex::ORIGIN,
                Piece {
                    color:  Color::White,
                    kind:   PieceKind::Queen,
                    number: 1,
                },
            )
            .with_pushed(
                Hex::new(2, 0),
                Piece {
                    color:  Color::White,
                    kind:   PieceKind::Beetle,
                    number: 1,
                },
            );
        let state = GameState::for_test(board, [Some(Hex::ORIGIN), None]);

        let beetle = Piece {
            color:  Color::White,
            kind:   PieceKind::Beetle,
            number: 1,
        };
        let mv = Move::Motion {
            piece: beetle,
            from: Hex::new(2, 0),
            from_index: 0,
            to: Hex::ORIGIN,
            to_index: 1,
            acting_color: Color::White,
            pillbug_assist: false,
        };

        let text = format_move(&state, &mv);
        assert_eq!(text.as_ref(), "wB1 wQ");
    }

    #[test]
    fn a_flagged_transfer_is_always_a_pillbug_move()
    {
        let board = Board::new()
            .with_pushed(
                Hex::ORIGIN,
                Piece {
                    color:  Color::White,
                    kind:   PieceKind::Queen,
                    number: 1,
                },
            )
            .with_pushed(
                Hex::new(2, 0),
                Piece {
                    color:  Color::Black,
                    kind:   PieceKind::Pillbug,
                    number: 1,
                },
            );
        let state = GameState::for_test(board, [Some(Hex::ORIGIN), None]);

        let mv = Move::Motion {
            piece: Piece {
                color:  Color::White,
                kind:   PieceKind::Queen,
                number: 1,
            },
            from: Hex::ORIGIN,
            from_index: 0,
            to: Hex::new(1, -1),
            to_index: 0,
            acting_color: Color::Black,
            pillbug_assist: true,
        };

        assert!(is_pillbug_move(&state, &mv));
    }

    #[test]
    fn a_pass_is_never_a_pillbug_move()
    {
        let state = GameState::initial(Options::default());
        assert!(!is_pillbug_move(&state, &Move::Pass { acting_color: Color::White }));
    }
}
