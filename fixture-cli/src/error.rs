//! Error types for fixture-file operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for fixture-file operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to create output file
    #[error("{}: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Output file already exists and overwriting is disabled
    #[error("{}: Output file already exists", path.display())]
    OutputExists {
        /// Path to the existing file
        path: PathBuf,
    },

    /// Failed to write the generated text
    #[error("{}: {source}", path.display())]
    WriteOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to read a fixture back
    #[error("{}: {source}", path.display())]
    ReadFixture {
        /// Path to the fixture file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Fixture generation or validation failed
    #[error(transparent)]
    Fixture(#[from] fixture_core::Error),

    /// General I/O error
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Specialized `Result` type for fixture-file operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<io::Error> for Error {
    fn from(source: io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        let kind = match &err {
            Error::OutputExists { .. } => io::ErrorKind::AlreadyExists,
            Error::CreateOutput { source, .. }
            | Error::WriteOutput { source, .. }
            | Error::ReadFixture { source, .. }
            | Error::Io { source } => source.kind(),
            Error::Fixture(inner) => match inner {
                fixture_core::Error::InvalidArgument(_) => io::ErrorKind::InvalidInput,
                fixture_core::Error::InvalidSymbol { .. }
                | fixture_core::Error::LengthMismatch { .. } => io::ErrorKind::InvalidData,
                fixture_core::Error::Io(source)
                | fixture_core::Error::WriteFile { source, .. } => source.kind(),
            },
        };
        io::Error::new(kind, err)
    }
}
