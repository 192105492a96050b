//! Fixture generation and verification against files.

use std::path::Path;

use fixture_core::{verify, FixtureGenerator, FrequencyReport, WriteSummary};

use crate::config::CliConfig;
use crate::error::{Error, Result};
use crate::io::{open_output, read_fixture};

/// Generates a fixture and writes it to `config.output`.
///
/// The text is generated in full before the output file is opened, so a
/// failure to open the file leaves any previous contents untouched.
///
/// # Errors
///
/// Returns an error if the output file cannot be opened or written.
pub fn generate_file(config: &CliConfig) -> Result<WriteSummary> {
    let mut generator = FixtureGenerator::new(config.fixture_options());
    let text = generator.generate();

    let output = open_output(&config.output, config)?;
    let summary = fixture_core::pipeline::write_to(output, &text).map_err(|err| match err {
        fixture_core::Error::Io(source) => Error::WriteOutput {
            path: config.output.clone(),
            source,
        },
        other => Error::Fixture(other),
    })?;

    if config.verbose {
        eprintln!(
            "Wrote {} characters ({} bytes) to {}",
            summary.chars_written,
            summary.bytes_written,
            config.output.display()
        );
    }

    Ok(summary)
}

/// Checks that the file at `path` is a valid fixture for `config`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, contains a symbol outside
/// `config.alphabet`, or does not hold exactly `config.length` characters.
pub fn verify_file(path: &Path, config: &CliConfig) -> Result<FrequencyReport> {
    let text = read_fixture(path)?;
    let report = verify(&text, &config.alphabet, config.length)?;

    if config.verbose {
        eprintln!(
            "{}: {} characters, chi-squared {:.2} ({} degrees of freedom)",
            path.display(),
            report.total(),
            report.chi_squared(),
            report.degrees_of_freedom()
        );
    }

    Ok(report)
}
