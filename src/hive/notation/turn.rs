use regex::Regex;

use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A ply count for one color: `turn` is 1-based, incrementing each time that color moves.
pub struct Turn
{
    pub color: Color,
    pub turn:  u16,
}

impl Turn
{
    /// The turn identifier for whichever color is next to move in `state`.
    pub fn current(state: &GameState) -> Turn
    {
        let color = state.current_turn();
        Turn {
            color,
            turn: state.turn_count(color) + 1,
        }
    }
}

impl From<Turn> for TurnString
{
    fn from(value: Turn) -> TurnString
    {
        TurnString(format!("{}[{}]", value.color, value.turn))
    }
}

impl TryFrom<TurnString> for Turn
{
    type Error = Error;
    fn try_from(value: TurnString) -> Result<Turn>
    {
        value.0.parse::<Turn>()
    }
}

impl FromStr for Turn
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let re = Regex::new(r"^(?<color>White|Black)\[(?<turn>[0-9]+)\]$").unwrap();

        let Some(caps) = re.captures(s)
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        let color = caps["color"].parse::<Color>();
        let turn = caps["turn"].parse::<u16>();

        let Ok(color) = color
        else
        {
            let err = color.err().unwrap();
            return Err(err.chain_parse::<Self>(s.into()));
        };

        let Ok(turn) = turn
        else
        {
            let err = Error::for_parse::<u16>(caps["turn"].into());
            return Err(err.chain_parse::<Self>(s.into()));
        };

        if turn == 0
        {
            let turn_error = Error::new(Kind::MalformedNotation, "Turn number cannot be 0.".into());
            return Err(turn_error.chain_parse::<Self>(s.into()));
        }

        Ok(Turn { color, turn })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents a valid (checked) turn string.
///
/// A turn string is of the form `Color[Turn]`; for example, `White[1]`.
pub struct TurnString(String);

impl std::fmt::Display for TurnString
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TurnString
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let turn = s.parse::<Turn>()?;
        Ok(turn.into())
    }
}

impl AsRef<str> for TurnString
{
    fn as_ref(&self) -> &str
    {
        self.0.as_str()
    }
}
