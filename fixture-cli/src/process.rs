//! High-level orchestration for the `fill-file` binary.

use std::io;

use crate::config::CliConfig;
use crate::operations::generate_file;

/// Generates the configured fixture file, prefixing errors with `program`.
///
/// # Parameters
///
/// * `config` - Output path, size, alphabet and flags
/// * `program` - Program name to include in error messages (e.g. "fill-file")
///
/// # Errors
///
/// Returns an [`io::Error`] whose kind matches the underlying failure and
/// whose message reads `<program>: <path>: <reason>`. Nothing is retried; a
/// failed run may leave the output file absent, empty or partially written.
pub fn run_cli(config: &CliConfig, program: &str) -> io::Result<()> {
    let summary = generate_file(config).map_err(|err| {
        let err = io::Error::from(err);
        io::Error::new(err.kind(), format!("{program}: {err}"))
    })?;

    tracing::debug!(
        output = %config.output.display(),
        chars = summary.chars_written,
        "fixture file generated"
    );
    Ok(())
}
