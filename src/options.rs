#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// The options applied to a game of Hive.
pub struct Options
{
    /// The expansions enabled on this game.
    pub expansions: ExpansionOptions,
}

impl Options
{
    /// Returns a fully-featured set of Options, including all expansion bugs.
    pub fn all() -> Self
    {
        Options {
            expansions: ExpansionOptions::all(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// The expansion bugs enabled on this game.
pub struct ExpansionOptions
{
    pub ladybug:  bool,
    pub mosquito: bool,
    pub pillbug:  bool,
}

impl ExpansionOptions
{
    /// Sets each expansion bug to be in-play.
    pub fn all() -> Self
    {
        ExpansionOptions {
            ladybug:  true,
            mosquito: true,
            pillbug:  true,
        }
    }
}
