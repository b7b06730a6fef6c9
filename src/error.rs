pub type Result<T> = anyhow::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents an error raised by the engine.
pub struct Error
{
    pub kind: Kind,
    pub msg:  String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The exhaustively-matchable taxonomy of errors the engine can raise.
pub enum Kind
{
    /// Removing a piece would disconnect the hive.
    BreaksConnection,
    /// An assertion that should never fail in practice tripped anyway.
    Internal,
    /// A hex violates the doubled-width parity rule.
    InvalidLocation,
    /// A motion is of a buried piece, has no piece at its source, or is not in the legal set.
    InvalidMove,
    /// A placement is disconnected, occupied, or violates color-adjacency.
    InvalidPlacement,
    /// Notation text could not be decoded.
    MalformedNotation,
    /// The required Queen placement by turn 4 was not honored.
    NoQueen,
    /// Notation names a piece that is not currently on the board.
    UnknownReference,
}

impl std::fmt::Display for Error
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{:?}{}{}", self.kind, Error::spacer_no_newline(&self.msg), self.msg)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error
{
    fn from(value: std::io::Error) -> Self
    {
        Error::internal(value.to_string())
    }
}

impl Error
{
    /// Chains an error into an error stack.
    pub fn chain(&self, base: Error) -> Error
    {
        let self_as = &format!("{}", self);
        let msg = format!("{}{}{}", base.msg, Error::spacer(self_as), self_as);
        Error::new(base.kind, msg)
    }

    /// Chains a parse error, tagging it with the type that failed to parse.
    pub fn chain_parse<T>(&self, s: String) -> Error
    {
        let base = Error::for_parse::<T>(s);
        self.chain(base)
    }

    /// Creates an error with no message.
    pub fn empty(kind: Kind) -> Error
    {
        Error::new(kind, "".into())
    }

    /// Creates a parse error for a particular type.
    pub fn for_parse<T>(s: String) -> Error
    {
        let type_name_base = Error::type_name::<T>();
        let err_msg = format!("'{}' is not a valid {}.", s, type_name_base);
        Error::new(Kind::MalformedNotation, err_msg)
    }

    pub fn mismatch<T: std::fmt::Display>(expected: T, actual: T) -> Error
    {
        let type_name_base = Error::type_name::<T>();
        let err_msg = format!("Mismatched {}s (expected {}, actual {})", type_name_base, expected, actual);
        Error::new(Kind::MalformedNotation, err_msg)
    }

    /// Creates a new error.
    pub fn new(kind: Kind, msg: String) -> Error
    {
        Error { kind, msg }
    }

    /// Wraps an error that should never have been reachable in practice.
    pub fn internal(msg: String) -> Error
    {
        Error::new(Kind::Internal, msg)
    }

    /// Gives the message changing spacer for the given string.
    fn spacer(s: &str) -> &'static str
    {
        if s.is_empty()
        {
            ""
        }
        else
        {
            "\n\tdue to "
        }
    }

    /// An inline spacer.
    fn spacer_no_newline(s: &str) -> &'static str
    {
        if s.is_empty()
        {
            ""
        }
        else
        {
            ": "
        }
    }

    /// Computes the basename for the parameterized type.
    pub fn type_name<T>() -> &'static str
    {
        let type_name = std::any::type_name::<T>();
        type_name.split("::").last().unwrap_or(type_name)
    }
}
