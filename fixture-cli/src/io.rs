//! Output-file handling for fixture generation.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind};
use std::path::Path;

use fixture_core::DEFAULT_BUFFER_SIZE;

use crate::config::CliConfig;
use crate::error::{Error, Result};

/// Opens the output file for writing, creating it or truncating it.
///
/// # Errors
///
/// - [`Error::OutputExists`] if `config.no_clobber` is set and the path
///   already exists; the check and the creation are one atomic open
/// - [`Error::CreateOutput`] if the file cannot be created (permissions,
///   missing parent directory, path is a directory)
pub fn open_output(path: &Path, config: &CliConfig) -> Result<BufWriter<File>> {
    let opened = if config.no_clobber {
        OpenOptions::new().write(true).create_new(true).open(path)
    } else {
        if path.is_file() {
            tracing::debug!(path = %path.display(), "replacing existing output file");
        }
        File::create(path)
    };

    let file = opened.map_err(|source| match source.kind() {
        ErrorKind::AlreadyExists => Error::OutputExists {
            path: path.to_path_buf(),
        },
        _ => Error::CreateOutput {
            path: path.to_path_buf(),
            source,
        },
    })?;
    Ok(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file))
}

/// Reads a fixture file back into memory.
///
/// # Errors
///
/// Returns [`Error::ReadFixture`] if the file cannot be read or is not valid
/// UTF-8.
pub fn read_fixture(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::ReadFixture {
        path: path.to_path_buf(),
        source,
    })
}
