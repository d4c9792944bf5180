//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Parking lot simulator.
///
/// Reads whitespace-tokenized commands (create_parking_lot, park, leave,
/// status) line by line and prints one response per executed command.
#[derive(Debug, Parser)]
#[command(name = "pl", version, about, long_about = None)]
pub struct Cli {
    /// Commands file to execute; reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// Enable verbose diagnostics on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}
