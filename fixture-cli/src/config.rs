//! Configuration types and constants for fixture-file generation.

use std::path::PathBuf;

use fixture_core::{Alphabet, FixtureOptions, DEFAULT_LENGTH};

/// Output file written when no other path is configured.
pub const DEFAULT_OUTPUT: &str = "text.txt";

/// Configuration for a fixture-file run.
///
/// The `fill-file` binary always uses [`CliConfig::default`]; the fields are
/// public so callers can generate fixtures of other sizes or symbol sets.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Output file path, relative to the working directory
    pub output: PathBuf,
    /// Number of characters to write
    pub length: usize,
    /// Symbols to draw from
    pub alphabet: Alphabet,
    /// Seed for reproducible output
    pub seed: Option<u64>,
    /// Refuse to replace an existing output file
    pub no_clobber: bool,
    /// Verbose output
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            length: DEFAULT_LENGTH,
            alphabet: Alphabet::alphanumeric(),
            seed: None,
            no_clobber: false,
            verbose: false,
        }
    }
}

impl CliConfig {
    /// Generator options derived from this configuration.
    pub fn fixture_options(&self) -> FixtureOptions {
        FixtureOptions::default()
            .with_length(self.length)
            .with_alphabet(self.alphabet.clone())
            .with_seed(self.seed)
    }
}
