//! Random text generation.

use std::path::Path;

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::Rng;

use crate::alphabet::Alphabet;
use crate::config::WriteSummary;
use crate::error::Result;
use crate::options::FixtureOptions;
use crate::pipeline;

/// Generates `length` characters drawn uniformly, with replacement, from
/// `alphabet`.
///
/// Each position is sampled independently with probability
/// `1 / alphabet.len()` per alphabet position. The output buffer is sized once up front
/// and filled in a single pass.
///
/// # Parameters
///
/// * `length` - Number of characters to produce
/// * `alphabet` - Symbol set to draw from
/// * `rng` - Source of randomness
///
/// # Returns
///
/// A string of exactly `length` characters, all members of `alphabet`.
pub fn generate<R: Rng + ?Sized>(length: usize, alphabet: &Alphabet, rng: &mut R) -> String {
    let symbols = alphabet.symbols();
    let index = Uniform::new(0, symbols.len());

    let mut text = String::with_capacity(length.saturating_mul(alphabet.max_encoded_len()));
    text.extend((0..length).map(|_| symbols[index.sample(&mut *rng)]));
    text
}

/// Generates a text from a raw symbol string and an optional seed.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
/// `symbols` is empty.
pub fn generate_text(length: usize, symbols: &str, seed: Option<u64>) -> Result<String> {
    let options = FixtureOptions::default()
        .with_length(length)
        .with_alphabet(Alphabet::new(symbols)?)
        .with_seed(seed);
    Ok(FixtureGenerator::new(options).generate())
}

/// Produces and persists random fixture texts.
///
/// The generator owns its random number generator, so successive calls to
/// [`generate`](Self::generate) continue one random stream. Two generators
/// built from the same seeded options produce the same sequence of texts.
#[derive(Debug)]
pub struct FixtureGenerator {
    options: FixtureOptions,
    rng: StdRng,
}

impl FixtureGenerator {
    /// Creates a generator from `options`.
    pub fn new(options: FixtureOptions) -> Self {
        let rng = options.build_rng();
        Self { options, rng }
    }

    /// Options this generator was built from.
    pub fn options(&self) -> &FixtureOptions {
        &self.options
    }

    /// Generates one fixture text.
    pub fn generate(&mut self) -> String {
        tracing::debug!(
            length = self.options.length(),
            alphabet_len = self.options.alphabet().len(),
            seeded = self.options.seed().is_some(),
            "generating fixture text"
        );
        generate(self.options.length(), self.options.alphabet(), &mut self.rng)
    }

    /// Generates one fixture text and writes it to `path`, replacing any
    /// existing file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WriteFile`](crate::Error::WriteFile) if the file cannot
    /// be created or written.
    pub fn write_file(&mut self, path: impl AsRef<Path>) -> Result<WriteSummary> {
        let text = self.generate();
        pipeline::write_file(path, &text)
    }

    /// Generates one fixture text and writes it to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if writing or flushing fails.
    pub fn write_to<W: std::io::Write>(&mut self, writer: W) -> Result<WriteSummary> {
        let text = self.generate();
        pipeline::write_to(writer, &text)
    }

    /// Asynchronous counterpart of [`write_file`](Self::write_file).
    ///
    /// # Errors
    ///
    /// Returns [`Error::WriteFile`](crate::Error::WriteFile) if the file cannot
    /// be created or written.
    #[cfg(feature = "async")]
    pub async fn write_file_async(&mut self, path: impl AsRef<Path>) -> Result<WriteSummary> {
        let text = self.generate();
        pipeline::write_file_async(path, &text).await
    }
}
