use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The two sides in a game of Hive.
pub enum Color
{
    White,
    Black,
}

impl Color
{
    /// Gets the opposing color.
    pub fn flip(&self) -> Self
    {
        match self
        {
            | Self::White => Self::Black,
            | Self::Black => Self::White,
        }
    }

    /// Returns the short name for this color, for use in piece and move notation.
    pub fn short(&self) -> &'static str
    {
        match self
        {
            | Self::White => "w",
            | Self::Black => "b",
        }
    }
}

impl std::fmt::Display for Color
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::White => "White",
            | Self::Black => "Black",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Color
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "White" | "w" => Ok(Self::White),
            | "Black" | "b" => Ok(Self::Black),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
