//! Fixture file generator
//!
//! Writes 2^20 random alphanumeric characters to `text.txt` in the current
//! directory, replacing any previous contents. Takes no arguments.

use std::process;

use fixture_cli::{run_cli, CliConfig};
use tracing::Level;

const PROGRAM_NAME: &str = "fill-file";

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::default();

    if let Err(err) = run_cli(&config, PROGRAM_NAME) {
        eprintln!("{err}");
        process::exit(1);
    }
}
