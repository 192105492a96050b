//! Error types and result handling for fixture generation and persistence.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type covering every failure mode of fixture generation.
#[derive(Debug)]
pub enum Error {
    /// Malformed caller input, such as an empty alphabet.
    InvalidArgument(String),

    /// I/O failure on a writer that has no associated path.
    Io(io::Error),

    /// The fixture file could not be created or written.
    WriteFile {
        /// Location of the output file
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// A text contains a character outside the expected alphabet.
    InvalidSymbol {
        /// Character offset of the first foreign symbol
        offset: usize,
        /// The offending character
        symbol: char,
    },

    /// A text does not have the expected number of characters.
    LengthMismatch {
        /// Number of characters the fixture should contain
        expected: usize,
        /// Number of characters actually found
        actual: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::WriteFile { path, source } => write!(f, "{}: {source}", path.display()),
            Error::InvalidSymbol { offset, symbol } => write!(
                f,
                "character {symbol:?} at offset {offset} is not in the alphabet",
            ),
            Error::LengthMismatch { expected, actual } => write!(
                f,
                "expected {expected} characters, found {actual}",
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) | Error::WriteFile { source: err, .. } => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl Error {
    /// Attaches `path` to a bare I/O error so the message names the file.
    pub(crate) fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Error::Io(source) => Error::WriteFile {
                path: path.into(),
                source,
            },
            other => other,
        }
    }
}
