use core::fmt;

/// Errors returned by table lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The string did not name one of the tables (or output formats).
    InvalidArgument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
