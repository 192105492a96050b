//! Asynchronous fixture persistence.

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};

use crate::config::{WriteSummary, DEFAULT_BUFFER_SIZE};
use crate::error::{Error, Result};

/// Writes `content` to `writer` in full and flushes it.
///
/// # Errors
///
/// Returns [`Error::Io`] if any write or the final flush fails.
pub async fn write_to_async<W>(mut writer: W, content: &str) -> Result<WriteSummary>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(content.as_bytes()).await?;
    writer.flush().await?;
    Ok(WriteSummary::for_text(content))
}

/// Writes `content` to the file at `path`, creating or truncating it.
///
/// # Errors
///
/// Returns [`Error::WriteFile`] naming `path` if the file cannot be created
/// or written.
pub async fn write_file_async(path: impl AsRef<Path>, content: &str) -> Result<WriteSummary> {
    let path = path.as_ref();
    let file = File::create(path)
        .await
        .map_err(|source| Error::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;

    let summary = write_to_async(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file), content)
        .await
        .map_err(|err| err.with_path(path))?;

    tracing::debug!(
        path = %path.display(),
        bytes = summary.bytes_written,
        "fixture written"
    );
    Ok(summary)
}
