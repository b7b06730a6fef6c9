use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
/// One of the six directions between adjacent hexes on the doubled-width grid.
pub enum Direction
{
    East,
    Southeast,
    Southwest,
    West,
    Northwest,
    Northeast,
}

impl Direction
{
    #[inline]
    /// Returns all directions, in fixed clockwise order starting upper-left.
    pub const fn all() -> [Direction; 6]
    {
        [Self::Northwest, Self::Northeast, Self::East, Self::Southeast, Self::Southwest, Self::West]
    }

    /// The (dq, dr) offset of this direction on the doubled-width grid.
    pub const fn offset(&self) -> (i32, i32)
    {
        match self
        {
            | Self::Northwest => (-1, -1),
            | Self::Northeast => (1, -1),
            | Self::East => (2, 0),
            | Self::Southeast => (1, 1),
            | Self::Southwest => (-1, 1),
            | Self::West => (-2, 0),
        }
    }

    /// Returns the direction clockwise of this one.
    pub fn clockwise(&self) -> Direction
    {
        match self
        {
            | Self::Northwest => Self::Northeast,
            | Self::Northeast => Self::East,
            | Self::East => Self::Southeast,
            | Self::Southeast => Self::Southwest,
            | Self::Southwest => Self::West,
            | Self::West => Self::Northwest,
        }
    }

    /// Returns the direction counterclockwise of this one.
    pub fn counterclockwise(&self) -> Direction
    {
        match self
        {
            | Self::Northwest => Self::West,
            | Self::West => Self::Southwest,
            | Self::Southwest => Self::Southeast,
            | Self::Southeast => Self::East,
            | Self::East => Self::Northeast,
            | Self::Northeast => Self::Northwest,
        }
    }

    /// Returns the inverse of this direction.
    pub fn inverse(&self) -> Direction
    {
        match self
        {
            | Self::East => Self::West,
            | Self::West => Self::East,
            | Self::Northeast => Self::Southwest,
            | Self::Southwest => Self::Northeast,
            | Self::Northwest => Self::Southeast,
            | Self::Southeast => Self::Northwest,
        }
    }

    /// Determines whether the direction's indicator is written before its reference piece.
    pub fn is_west(&self) -> bool
    {
        matches!(self, Self::West | Self::Northwest | Self::Southwest)
    }

    pub fn long(&self) -> &'static str
    {
        match self
        {
            | Self::East => "east",
            | Self::Southeast => "southeast",
            | Self::Southwest => "southwest",
            | Self::West => "west",
            | Self::Northwest => "northwest",
            | Self::Northeast => "northeast",
        }
    }

    /// Parses a direction indicator token (`-`, `/`, `\`), given whether it appeared before (`on_left`) the reference piece.
    pub fn parse(s: &str, on_left: bool) -> Result<Direction>
    {
        match s
        {
            | "-" => Ok(if on_left { Self::West } else { Self::East }),
            | "/" => Ok(if on_left { Self::Southwest } else { Self::Northeast }),
            | "\\" => Ok(if on_left { Self::Northwest } else { Self::Southeast }),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }

    #[inline]
    /// If the two hexes are neighbours, returns the direction from the first to the second.
    pub fn to(from: Hex, to: Hex) -> Option<Direction>
    {
        Direction::all().into_iter().find(|direction| (from + *direction) == to)
    }
}

impl std::fmt::Display for Direction
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let repr = match self
        {
            | Self::East | Self::West => "-",
            | Self::Northeast | Self::Southwest => "/",
            | Self::Northwest | Self::Southeast => "\\",
        };

        write!(f, "{repr}")
    }
}
