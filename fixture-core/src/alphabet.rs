//! Symbol sets that fixture characters are drawn from.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Lowercase Latin letters.
pub const ASCII_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase Latin letters.
pub const ASCII_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Decimal digits.
pub const DIGITS: &str = "0123456789";

/// An ordered, non-empty sequence of characters.
///
/// Symbols are drawn by position, so a character listed twice is drawn
/// twice as often. The order is significant: a seeded generator maps the
/// same random index to the same symbol, so two alphabets with the same
/// symbols in a different order produce different texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from the characters of `symbols`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `symbols` is empty.
    pub fn new(symbols: &str) -> Result<Self> {
        Self::from_chars(symbols.chars())
    }

    /// Builds an alphabet from a sequence of characters, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the sequence is empty.
    pub fn from_chars(symbols: impl IntoIterator<Item = char>) -> Result<Self> {
        let collected: Vec<char> = symbols.into_iter().collect();
        if collected.is_empty() {
            return Err(Error::InvalidArgument("alphabet is empty".to_string()));
        }

        Ok(Self { symbols: collected })
    }

    /// The 62 ASCII letters and digits, lowercase first, then uppercase,
    /// then digits.
    pub fn alphanumeric() -> Self {
        Self::from_known([ASCII_LOWERCASE, ASCII_UPPERCASE, DIGITS])
    }

    /// The 52 ASCII letters, lowercase first.
    pub fn letters() -> Self {
        Self::from_known([ASCII_LOWERCASE, ASCII_UPPERCASE])
    }

    /// The 26 lowercase ASCII letters.
    pub fn lowercase() -> Self {
        Self::from_known([ASCII_LOWERCASE])
    }

    /// The 26 uppercase ASCII letters.
    pub fn uppercase() -> Self {
        Self::from_known([ASCII_UPPERCASE])
    }

    /// The ten decimal digits.
    pub fn digits() -> Self {
        Self::from_known([DIGITS])
    }

    // Preset tables are non-empty.
    fn from_known<const N: usize>(parts: [&str; N]) -> Self {
        Self {
            symbols: parts.iter().flat_map(|part| part.chars()).collect(),
        }
    }

    /// Number of positions, counting repeated characters each time.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; an alphabet cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols in order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns the symbol at `index`, if any.
    pub fn get(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Returns `true` if `symbol` belongs to the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Returns `true` if every symbol is ASCII.
    pub fn is_ascii(&self) -> bool {
        self.symbols.iter().all(char::is_ascii)
    }

    /// Largest UTF-8 encoded length of any symbol, in bytes.
    pub fn max_encoded_len(&self) -> usize {
        self.symbols
            .iter()
            .map(|symbol| symbol.len_utf8())
            .max()
            .unwrap_or(1)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::alphanumeric()
    }
}

impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
