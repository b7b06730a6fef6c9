use crate::prelude::*;

#[derive(Clone, Copy, Debug)]
/// The not-yet-placed pieces belonging to both sides.
pub struct Reserves
{
    pieces: [[u8; 8]; 2],
    totals: [u8; 8],
}

impl Default for Reserves
{
    fn default() -> Self
    {
        Reserves::new(Options::default())
    }
}

impl Reserves
{
    /// Creates a full reserve, sized according to the enabled expansions.
    pub fn new(options: Options) -> Reserves
    {
        let extents = Reserves::_extents(options);
        Reserves {
            pieces: [extents, extents],
            totals: extents,
        }
    }

    /// Returns the starting number of each kind for the options this reserve was built with.
    pub fn extents(&self) -> &[u8; 8]
    {
        &self.totals
    }

    /// Determines how many pieces of each kind are left in a side's hand.
    pub fn hand(&self, color: Color) -> &[u8; 8]
    {
        &self.pieces[color as usize]
    }

    /// Whether the reserve for a side is completely empty.
    pub fn is_empty(&self, color: Color) -> bool
    {
        self.pieces[color as usize].iter().all(|&n| n == 0)
    }

    /// Peeks the next piece of a kind without taking it.
    pub fn next(&self, color: Color, kind: PieceKind) -> Option<Piece>
    {
        self.peek(color, kind).map(|number| Piece { color, kind, number })
    }

    /// Returns the lowest discriminator left for the given piece kind.
    pub fn peek(&self, color: Color, kind: PieceKind) -> Option<u8>
    {
        let remaining = self.pieces[color as usize][kind_index(kind)];
        if remaining > 0
        {
            Some(1 + self.totals[kind_index(kind)] - remaining)
        }
        else
        {
            None
        }
    }

    /// Puts a piece back into reserve. The discriminator is unchecked; callers should have
    /// obtained it from this same reserve via `take`.
    pub fn put(&mut self, piece: Piece)
    {
        self.pieces[piece.color as usize][kind_index(piece.kind)] += 1;
    }

    /// Tries to take a piece of the given kind, returning it with the lowest discriminator
    /// remaining for that kind.
    pub fn take(&mut self, color: Color, kind: PieceKind) -> Option<Piece>
    {
        let next = self.peek(color, kind);
        if let Some(number) = next
        {
            self.pieces[color as usize][kind_index(kind)] -= 1;
            Some(Piece { color, kind, number })
        }
        else
        {
            None
        }
    }

    /// Returns the starting number of each kind for the given options.
    fn _extents(options: Options) -> [u8; 8]
    {
        let exp = options.expansions;

        // Ant, Beetle, Grasshopper, Ladybug, Mosquito, Pillbug, Queen, Spider
        let mut base: [u8; 8] = [3, 2, 3, 0, 0, 0, 1, 2];
        let mask: [u8; 8] = [0, 0, 0, exp.ladybug as u8, exp.mosquito as u8, exp.pillbug as u8, 0, 0];
        for i in 0..8
        {
            base[i] += mask[i];
        }

        base
    }
}

fn kind_index(kind: PieceKind) -> usize
{
    PieceKind::all().iter().position(|k| *k == kind).unwrap()
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn base_game_has_no_expansion_pieces()
    {
        let reserves = Reserves::new(Options::default());
        assert_eq!(reserves.peek(Color::White, PieceKind::Pillbug), None);
        assert_eq!(reserves.peek(Color::White, PieceKind::Queen), Some(1));
    }

    #[test]
    fn take_then_put_restores_the_same_discriminator()
    {
        let mut reserves = Reserves::new(Options::all());
        let first = reserves.take(Color::White, PieceKind::Ant).unwrap();
        assert_eq!(first.number, 1);
        let second = reserves.take(Color::White, PieceKind::Ant).unwrap();
        assert_eq!(second.number, 2);
        reserves.put(second);
        let third = reserves.take(Color::White, PieceKind::Ant).unwrap();
        assert_eq!(third.number, 2);
    }
}
