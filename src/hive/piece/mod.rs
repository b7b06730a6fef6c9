use crate::prelude::*;

mod color;
mod kind;
mod reserves;

pub use color::Color;
pub use kind::PieceKind;
pub use reserves::Reserves;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A piece in the game of Hive.
///
/// `number` disambiguates copies of the same (color, kind) within a side; for example, the
/// third Ant in white's hand is `wA3`.
pub struct Piece
{
    pub color:  Color,
    pub kind:   PieceKind,
    pub number: u8,
}

impl FromStr for Piece
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        if s.len() < 2 || s.len() > 3
        {
            let err = Error::new(Kind::MalformedNotation, format!("Invalid length (expected 2 or 3, found {}).", s.len()));
            return Err(err.chain_parse::<Self>(s.into()));
        }

        let color = s[0..=0].parse::<Color>();
        let kind = s[1..=1].parse::<PieceKind>();

        let Ok(color) = color
        else
        {
            let err = color.unwrap_err();
            return Err(err.chain_parse::<Self>(s.into()));
        };

        let Ok(kind) = kind
        else
        {
            let err = kind.unwrap_err();
            return Err(err.chain_parse::<Self>(s.into()));
        };

        let number = if kind.unique()
        {
            if s.len() > 2
            {
                let err = Error::new(Kind::MalformedNotation, "Unique pieces should have no number.".into());
                return Err(err.chain_parse::<Self>(s.into()));
            }
            1
        }
        else
        {
            if s.len() < 3
            {
                let err = Error::new(Kind::MalformedNotation, "Non-unique pieces must have a number.".into());
                return Err(err.chain_parse::<Self>(s.into()));
            }

            let found_number = s[2..=2].parse::<u8>();

            let Ok(found_number) = found_number
            else
            {
                let err = Error::for_parse::<u8>(s[2..=2].into());
                return Err(err.chain_parse::<Self>(s.into()));
            };

            if !(1..=kind.extent()).contains(&found_number)
            {
                let err_msg = format!(
                    "Invalid number for {} (expected 1 to {}, found {}).",
                    kind.long(),
                    kind.extent(),
                    found_number
                );
                let err = Error::new(Kind::MalformedNotation, err_msg);
                return Err(err.chain_parse::<Self>(s.into()));
            }
            found_number
        };

        Ok(Piece { color, kind, number })
    }
}

impl std::fmt::Display for Piece
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self.kind.unique()
        {
            | true => write!(f, "{}{}", self.color.short(), self.kind),
            | false => write!(f, "{}{}{}", self.color.short(), self.kind, self.number),
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn displays_and_reparses_a_unique_piece()
    {
        let piece = Piece {
            color:  Color::White,
            kind:   PieceKind::Queen,
            number: 1,
        };
        assert_eq!(piece.to_string(), "wQ");
        assert_eq!("wQ".parse::<Piece>().unwrap(), piece);
    }

    #[test]
    fn displays_and_reparses_a_numbered_piece()
    {
        let piece = Piece {
            color:  Color::Black,
            kind:   PieceKind::Ant,
            number: 2,
        };
        assert_eq!(piece.to_string(), "bA2");
        assert_eq!("bA2".parse::<Piece>().unwrap(), piece);
    }

    #[test]
    fn rejects_a_number_on_a_unique_piece()
    {
        assert!("wQ1".parse::<Piece>().is_err());
    }

    #[test]
    fn rejects_an_out_of_range_number()
    {
        assert!("wA9".parse::<Piece>().is_err());
    }
}
