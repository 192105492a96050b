//! Symbol frequency analysis for generated fixtures.
//!
//! A fixture is only useful as benchmark input if its symbols are spread
//! evenly. [`FrequencyReport`] counts each symbol and runs a chi-squared
//! goodness-of-fit test against the uniform distribution.

use std::collections::HashMap;

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};

/// Confidence level for the chi-squared uniformity test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    /// 95% confidence
    P95,
    /// 99% confidence
    P99,
    /// 99.9% confidence
    P999,
}

impl Confidence {
    /// Upper standard normal quantile for this confidence level.
    fn z_score(self) -> f64 {
        match self {
            Confidence::P95 => 1.644_853_6,
            Confidence::P99 => 2.326_347_9,
            Confidence::P999 => 3.090_232_3,
        }
    }
}

/// Per-symbol occurrence counts of a text over an alphabet.
///
/// Counts are kept once per distinct character, in order of first
/// appearance in the alphabet. A character listed `k` times in an alphabet
/// of `n` positions is expected with probability `k / n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyReport {
    symbols: Vec<char>,
    weights: Vec<u64>,
    counts: Vec<u64>,
    positions: u64,
    total: u64,
}

impl FrequencyReport {
    /// Counts every symbol of `text`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSymbol`] for the first character of `text` that
    /// is not part of `alphabet`.
    pub fn from_text(text: &str, alphabet: &Alphabet) -> Result<Self> {
        let mut symbols = Vec::new();
        let mut weights = Vec::new();
        let mut slots: HashMap<char, usize> = HashMap::new();
        for &symbol in alphabet.symbols() {
            let slot = *slots.entry(symbol).or_insert_with(|| {
                symbols.push(symbol);
                weights.push(0);
                symbols.len() - 1
            });
            weights[slot] += 1;
        }

        let mut counts = vec![0u64; symbols.len()];
        let mut total = 0u64;
        for (offset, symbol) in text.chars().enumerate() {
            let slot = *slots
                .get(&symbol)
                .ok_or(Error::InvalidSymbol { offset, symbol })?;
            counts[slot] += 1;
            total += 1;
        }

        Ok(Self {
            symbols,
            weights,
            counts,
            positions: alphabet.len() as u64,
            total,
        })
    }

    /// Number of characters counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Distinct symbols, in order of first appearance in the alphabet.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Occurrences of `symbol`, or `None` if it is not in the alphabet.
    pub fn count(&self, symbol: char) -> Option<u64> {
        self.slot(symbol).map(|slot| self.counts[slot])
    }

    /// Counts in the order of [`symbols`](Self::symbols).
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Number of alphabet positions holding `symbol`, or `None` if it is
    /// not in the alphabet.
    pub fn weight(&self, symbol: char) -> Option<u64> {
        self.slot(symbol).map(|slot| self.weights[slot])
    }

    /// Expected count of each distinct symbol under uniform sampling of
    /// alphabet positions, in the order of [`symbols`](Self::symbols).
    #[allow(clippy::cast_precision_loss)]
    pub fn expected(&self) -> Vec<f64> {
        self.weights
            .iter()
            .map(|&weight| self.total as f64 * weight as f64 / self.positions as f64)
            .collect()
    }

    /// Pearson's chi-squared statistic against the distribution implied by
    /// the alphabet.
    ///
    /// Returns `0.0` for an empty text.
    #[allow(clippy::cast_precision_loss)]
    pub fn chi_squared(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        self.counts
            .iter()
            .zip(self.expected())
            .map(|(&observed, expected)| {
                let delta = observed as f64 - expected;
                delta * delta / expected
            })
            .sum()
    }

    /// Degrees of freedom of the test: one less than the number of distinct
    /// symbols.
    pub fn degrees_of_freedom(&self) -> usize {
        self.symbols.len() - 1
    }

    /// Returns `true` if the counts are consistent with uniform sampling of
    /// alphabet positions at the given confidence.
    ///
    /// Single-symbol alphabets are trivially uniform.
    pub fn is_uniform(&self, confidence: Confidence) -> bool {
        match self.degrees_of_freedom() {
            0 => true,
            dof => self.chi_squared() <= critical_value(dof, confidence),
        }
    }

    fn slot(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&candidate| candidate == symbol)
    }
}

/// Approximate upper quantile of the chi-squared distribution.
///
/// Uses the Wilson-Hilferty cube-root transform, which is accurate to well
/// under one percent for the alphabet sizes fixtures use.
#[allow(clippy::cast_precision_loss)]
pub fn critical_value(degrees_of_freedom: usize, confidence: Confidence) -> f64 {
    let k = degrees_of_freedom as f64;
    let spread = 2.0 / (9.0 * k);
    k * (1.0 - spread + confidence.z_score() * spread.sqrt()).powi(3)
}

/// Checks `text` against the fixture invariant and returns its frequencies.
///
/// # Errors
///
/// - [`Error::InvalidSymbol`] for the first character outside `alphabet`
/// - [`Error::LengthMismatch`] if `text` does not hold exactly
///   `expected_length` characters
pub fn verify(text: &str, alphabet: &Alphabet, expected_length: usize) -> Result<FrequencyReport> {
    let report = FrequencyReport::from_text(text, alphabet)?;

    let actual = usize::try_from(report.total()).unwrap_or(usize::MAX);
    if actual != expected_length {
        return Err(Error::LengthMismatch {
            expected: expected_length,
            actual,
        });
    }

    Ok(report)
}
