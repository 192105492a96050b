//! Fixture-file generation for substring-search benchmarks.
//!
//! This crate wires [`fixture_core`] to the filesystem: it owns the output
//! file, maps failures to descriptive errors and drives the single
//! "generate, then write" step behind the `fill-file` binary.

pub mod config;
pub mod error;
pub mod io;
pub mod operations;
pub mod process;


pub use config::{CliConfig, DEFAULT_OUTPUT};
pub use error::{Error, Result};
pub use io::{open_output, read_fixture};
pub use operations::{generate_file, verify_file};
pub use process::run_cli;
