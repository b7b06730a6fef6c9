use std::rc::Rc;

use crate::hive::notation::moves::{translate, MoveString};
use crate::hive::notation::turn::Turn;
use crate::hive::state::apply;
use crate::prelude::*;

/// Replays a full list of notation move-strings from the initial position under `options`,
/// returning the resulting state.
///
/// Fails on the first unparsable or illegal move, with that move's text chained into the
/// returned error so the caller can tell which ply in the list was at fault. When `turn_hint`
/// is given, it overrides the replayed result's final `current_turn` rather than being
/// cross-checked against it — mirroring the ground-truth loader's own unconditional
/// `game.current_turn = hint` assignment.
pub fn replay(moves: &[MoveString], options: Options, turn_hint: Option<Turn>) -> Result<Rc<GameState>>
{
    let mut state = GameState::initial(options);
    for movestr in moves
    {
        let mv = translate(&state, movestr).map_err(|err| err.chain_parse::<MoveString>(movestr.as_ref().to_owned()))?;
        state = apply(&state, mv)?;
    }

    if let Some(hint) = turn_hint
    {
        state = Rc::new(state.with_current_turn(hint.color));
    }

    Ok(state)
}
