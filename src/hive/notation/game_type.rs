use multiset::HashMultiSet;
use regex::Regex;

use crate::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A validated `Base[+LMP]` game-type string, naming which expansion pieces are in play.
pub struct GameTypeString(pub(crate) String);

impl std::fmt::Display for GameTypeString
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameTypeString
{
    type Err = Error;
    fn from_str(s: &str) -> std::prelude::v1::Result<Self, Self::Err>
    {
        let re = Regex::new(r"^Base(\+(?<expansions>[LMP]{1,3}))?$").unwrap();
        let Some(caps) = re.captures(s)
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        if let Some(exps) = caps.name("expansions").map(|m| m.as_str().chars().collect::<HashMultiSet<_>>())
        {
            if ['L', 'M', 'P'].iter().any(|ch| exps.count_of(ch) > 1)
            {
                let err_msg = "should contain at most 1 of each expansion bug (L, M, or P)".into();
                let expansion_err = Error::new(Kind::MalformedNotation, err_msg);
                return Err(expansion_err.chain_parse::<Self>(s.into()));
            }
        }

        Ok(GameTypeString(s.into()))
    }
}

impl AsRef<str> for GameTypeString
{
    fn as_ref(&self) -> &str
    {
        self.0.as_str()
    }
}

impl From<ExpansionOptions> for GameTypeString
{
    fn from(value: ExpansionOptions) -> Self
    {
        let plus = if value.ladybug || value.mosquito || value.pillbug { "+" } else { "" };
        let l = if value.ladybug { "L" } else { "" };
        let m = if value.mosquito { "M" } else { "" };
        let p = if value.pillbug { "P" } else { "" };

        GameTypeString(format!("Base{}{}{}{}", plus, l, m, p))
    }
}

impl From<GameTypeString> for ExpansionOptions
{
    fn from(value: GameTypeString) -> ExpansionOptions
    {
        ExpansionOptions {
            ladybug:  value.0.contains('L'),
            mosquito: value.0.contains('M'),
            pillbug:  value.0.contains('P'),
        }
    }
}
