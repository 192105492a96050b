//! Configuration builder for fixture generation.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::alphabet::Alphabet;
use crate::config::DEFAULT_LENGTH;

/// Configuration builder for [`FixtureGenerator`](crate::FixtureGenerator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureOptions {
    length: usize,
    alphabet: Alphabet,
    seed: Option<u64>,
}

impl Default for FixtureOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            alphabet: Alphabet::alphanumeric(),
            seed: None,
        }
    }
}

impl FixtureOptions {
    /// Sets the number of characters to generate.
    ///
    /// A length of zero produces an empty text.
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the symbol set characters are drawn from.
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Seeds the generator for reproducible output.
    ///
    /// - `Some(seed)`: the same options always produce the same text
    /// - `None` (default): the generator is seeded from OS entropy
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Number of characters to generate.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Symbol set characters are drawn from.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Seed, if one was configured.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub(crate) fn build_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
