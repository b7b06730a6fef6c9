use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The eight piece species in Hive.
pub enum PieceKind
{
    Ant,
    Beetle,
    Grasshopper,
    Ladybug,
    Mosquito,
    Pillbug,
    Queen,
    Spider,
}

impl PieceKind
{
    /// Returns every kind, in a fixed order.
    pub const fn all() -> [PieceKind; 8]
    {
        [
            Self::Ant,
            Self::Beetle,
            Self::Grasshopper,
            Self::Ladybug,
            Self::Mosquito,
            Self::Pillbug,
            Self::Queen,
            Self::Spider,
        ]
    }

    /// The number of copies of this kind a side starts with, with every expansion enabled.
    pub fn extent(&self) -> u8
    {
        match self
        {
            | Self::Ant => 3,
            | Self::Beetle => 2,
            | Self::Grasshopper => 3,
            | Self::Ladybug => 1,
            | Self::Mosquito => 1,
            | Self::Pillbug => 1,
            | Self::Queen => 1,
            | Self::Spider => 2,
        }
    }

    /// Whether this kind is the expansion set (as opposed to the base game).
    pub fn is_expansion(&self) -> bool
    {
        matches!(self, Self::Ladybug | Self::Mosquito | Self::Pillbug)
    }

    pub fn long(&self) -> &'static str
    {
        match self
        {
            | Self::Ant => "Ant",
            | Self::Beetle => "Beetle",
            | Self::Grasshopper => "Grasshopper",
            | Self::Ladybug => "Ladybug",
            | Self::Mosquito => "Mosquito",
            | Self::Pillbug => "Pillbug",
            | Self::Queen => "Queen",
            | Self::Spider => "Spider",
        }
    }

    /// Whether a side ever has more than one copy of this kind.
    pub fn unique(&self) -> bool
    {
        matches!(self, Self::Ladybug | Self::Mosquito | Self::Pillbug | Self::Queen)
    }
}

impl std::fmt::Display for PieceKind
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::Ant => "A",
            | Self::Beetle => "B",
            | Self::Grasshopper => "G",
            | Self::Ladybug => "L",
            | Self::Mosquito => "M",
            | Self::Pillbug => "P",
            | Self::Queen => "Q",
            | Self::Spider => "S",
        };
        write!(f, "{name}")
    }
}

impl FromStr for PieceKind
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "A" => Ok(Self::Ant),
            | "B" => Ok(Self::Beetle),
            | "G" => Ok(Self::Grasshopper),
            | "L" => Ok(Self::Ladybug),
            | "M" => Ok(Self::Mosquito),
            | "P" => Ok(Self::Pillbug),
            | "Q" => Ok(Self::Queen),
            | "S" => Ok(Self::Spider),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
