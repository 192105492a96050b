//! # fixture-core
//!
//! Uniform random text fixtures over a fixed alphabet.
//!
//! This crate builds fixed-length texts whose characters are drawn
//! independently and uniformly from an [`Alphabet`], and persists them to
//! files or writers. The default configuration reproduces the classic
//! substring-search fixture: 2^20 characters from `[a-zA-Z0-9]`.
//!
//! ```no_run
//! use fixture_core::{FixtureGenerator, FixtureOptions};
//!
//! let mut generator = FixtureGenerator::new(FixtureOptions::default());
//! let summary = generator.write_file("text.txt")?;
//! assert_eq!(summary.chars_written, 1 << 20);
//! # Ok::<(), fixture_core::Error>(())
//! ```
//!
//! Randomness comes from an explicit generator owned by [`FixtureGenerator`].
//! Setting a seed through [`FixtureOptions::with_seed`] makes the output
//! reproducible.

pub mod alphabet;
pub mod config;
pub mod error;
pub mod generator;
pub mod options;
pub mod pipeline;
pub mod stats;

pub use alphabet::Alphabet;
pub use config::{WriteSummary, DEFAULT_BUFFER_SIZE, DEFAULT_LENGTH};
pub use error::{Error, Result};
pub use generator::{generate, generate_text, FixtureGenerator};
pub use options::FixtureOptions;
pub use stats::{verify, Confidence, FrequencyReport};
