use hive_engine::prelude::*;
use pretty_assertions::assert_eq;

/// Runs a game encoded as a `units;result;turn;moves...` record, and checks both that the
/// record parses and that replaying it lands on the claimed turn and outcome. A record whose
/// moves are illegal (or whose claimed turn doesn't match what actually happens) causes
/// `replay` to return an `Err`, which this function unwraps into a panic — the `#[should_panic]`
/// scenarios in `tests/base.rs` rely on exactly that.
pub fn run_game(raw_string: &'static str)
{
    let record: GameRecord = raw_string.parse().expect("a well-formed replay record");
    let state = record.replay().expect("a legal sequence of moves replaying to the record's own claimed turn");

    assert_eq!(outcome_string(&state), record.result, "unexpected outcome for {:?}", raw_string);
}

/// Derives the same `NotStarted`/`InProgress`/`Draw`/`<Color>Wins` vocabulary the replay store's
/// `result` field uses, from the engine's own `winner`/`has_lost` queries.
fn outcome_string(state: &GameState) -> String
{
    match winner(state)
    {
        | Some(color) => format!("{}Wins", color),
        | None if has_lost(state, Color::White) && has_lost(state, Color::Black) => "Draw".into(),
        | None if state.last_move().is_none() => "NotStarted".into(),
        | None => "InProgress".into(),
    }
}
