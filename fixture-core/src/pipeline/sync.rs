//! Synchronous fixture persistence.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::{WriteSummary, DEFAULT_BUFFER_SIZE};
use crate::error::{Error, Result};

/// Writes `content` to `writer` in full and flushes it.
///
/// The text is written as UTF-8 bytes with no framing, trailing newline or
/// byte-order mark.
///
/// # Errors
///
/// Returns [`Error::Io`] if any write or the final flush fails.
pub fn write_to<W: Write>(mut writer: W, content: &str) -> Result<WriteSummary> {
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(WriteSummary::for_text(content))
}

/// Writes `content` to the file at `path`, creating it or truncating any
/// existing contents.
///
/// The file handle is released when this function returns, on success and
/// on error alike. A failure part-way through may leave a truncated file.
///
/// # Errors
///
/// Returns [`Error::WriteFile`] naming `path` if the file cannot be created
/// (missing parent directory, permissions, path is a directory) or written
/// (disk full).
pub fn write_file(path: impl AsRef<Path>, content: &str) -> Result<WriteSummary> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;

    let summary = write_to(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file), content)
        .map_err(|err| err.with_path(path))?;

    tracing::debug!(
        path = %path.display(),
        bytes = summary.bytes_written,
        "fixture written"
    );
    Ok(summary)
}
