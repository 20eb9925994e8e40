use std::error::Error as StdError;
use std::fmt;
use std::num::ParseFloatError;
use std::string::FromUtf8Error;

// type alias for Result for use across the library
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Parse(String),
    Document(String),
    Cli(String),
    Message(String),
    Other(Box<dyn StdError>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(source) => write!(f, "IO error: {source}"),
            Error::Parse(reason) => write!(f, "Parse error: {reason}"),
            Error::Document(reason) => write!(f, "Document error: {reason}"),
            Error::Cli(reason) => write!(f, "{reason}"),
            Error::Message(reason) => write!(f, "{reason}"),
            Error::Other(source) => write!(f, "{source}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(source) => Some(source),
            Error::Parse(_) => None,
            Error::Document(_) => None,
            Error::Cli(_) => None,
            Error::Message(_) => None,
            Error::Other(e) => Some(&**e),
        }
    }
}

impl Error {
    pub fn from_err<T>(err: T) -> Error
    where
        T: StdError + 'static,
    {
        Error::Other(Box::new(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<ParseFloatError> for Error {
    fn from(err: ParseFloatError) -> Error {
        Error::Parse(format!("float: {err}"))
    }
}

impl From<FromUtf8Error> for Error {
    fn from(err: FromUtf8Error) -> Error {
        Error::Parse(format!("utf8: {err}"))
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Error {
        Error::Message(err.to_string())
    }
}

/// Non-fatal problems found while interpreting path data.
///
/// These never abort a conversion on their own; they are collected next
/// to the geometry and reported by the emitter. The single exception is
/// `BadMoveTo`, after which the rest of that path string is abandoned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathWarning {
    BadMoveTo,
    BadOperands(char),
    Unsupported(char),
    /// Operands with no command able to take them (`None`: before any command)
    StrayOperands(Option<char>),
}

impl fmt::Display for PathWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathWarning::BadMoveTo => write!(f, "bad moveto"),
            PathWarning::BadOperands('l' | 'L') => write!(f, "bad lineto"),
            PathWarning::BadOperands(cmd) => write!(f, "bad {}", cmd.to_ascii_lowercase()),
            PathWarning::Unsupported(cmd) => write!(f, "unsupported cmd {cmd}"),
            PathWarning::StrayOperands(Some(cmd)) => write!(f, "stray operands after {cmd}"),
            PathWarning::StrayOperands(None) => write!(f, "stray operands"),
        }
    }
}
