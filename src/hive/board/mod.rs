use std::collections::HashMap;

use crate::prelude::*;

pub mod topology;

/// A non-empty, bottom-first ordered sequence of pieces occupying one hex.
pub type Stack = Vec<Piece>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// A mapping from hex to the non-empty stack of pieces occupying it.
///
/// *Invariants*: every key satisfies [`parity_ok`]; every stack is non-empty; the set of
/// occupied hexes forms a single connected component, except transiently during the two-step
/// pick-up/put-down of a motion (the engine never observes that intermediate state directly —
/// see [`crate::hive::state::GameState`]).
pub struct Board
{
    stacks: HashMap<Hex, Stack>,
}

impl Board
{
    pub fn new() -> Board
    {
        Board { stacks: HashMap::new() }
    }

    /// Returns the stack at a hex, if any.
    pub fn get(&self, h: Hex) -> Option<&Stack>
    {
        self.stacks.get(&h)
    }

    /// Returns the topmost piece at a hex, if any.
    pub fn top(&self, h: Hex) -> Option<Piece>
    {
        self.stacks.get(&h).and_then(|s| s.last()).copied()
    }

    /// The number of pieces stacked at a hex (0 if empty).
    pub fn height(&self, h: Hex) -> usize
    {
        self.stacks.get(&h).map_or(0, |s| s.len())
    }

    /// Whether any piece occupies this hex.
    pub fn is_occupied(&self, h: Hex) -> bool
    {
        self.stacks.contains_key(&h)
    }

    /// Every occupied hex, in no particular order.
    pub fn occupied(&self) -> impl Iterator<Item = Hex> + '_
    {
        self.stacks.keys().copied()
    }

    /// Every occupied neighbour of a hex.
    pub fn neighbours_with_piece(&self, h: Hex) -> Vec<Hex>
    {
        hex::neighbours(h).into_iter().filter(|n| self.is_occupied(*n)).collect()
    }

    /// Every empty neighbour of a hex (height 0).
    pub fn empty_adjacent(&self, h: Hex) -> Vec<Hex>
    {
        hex::neighbours(h).into_iter().filter(|n| !self.is_occupied(*n)).collect()
    }

    /// Finds the hex currently holding a given piece, if it is on the board.
    pub fn locate(&self, piece: Piece) -> Option<Hex>
    {
        self.stacks.iter().find(|(_, stack)| stack.contains(&piece)).map(|(h, _)| *h)
    }

    /// Whether the given piece is currently somewhere on the board.
    pub fn placed(&self, piece: &Piece) -> bool
    {
        self.locate(*piece).is_some()
    }

    /// Returns a new board with `piece` pushed onto the stack at `h`, creating the stack if
    /// it did not already exist. The new stack's height minus one is the piece's index.
    pub fn with_pushed(&self, h: Hex, piece: Piece) -> Board
    {
        let mut stacks = self.stacks.clone();
        stacks.entry(h).or_default().push(piece);
        Board { stacks }
    }

    /// Returns a new board with the top piece at `h` removed, dropping the key entirely once
    /// the stack empties.
    pub fn with_popped(&self, h: Hex) -> Board
    {
        let mut stacks = self.stacks.clone();
        if let Some(stack) = stacks.get_mut(&h)
        {
            stack.pop();
            if stack.is_empty()
            {
                stacks.remove(&h);
            }
        }
        Board { stacks }
    }
}
