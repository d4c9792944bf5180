use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pl_cli::{Cli, Config, runner};
use pl_core::ParkingService;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;

    // Diagnostics go to stderr so they never interleave with responses on stdout.
    let filter = if cli.verbose || config.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
    tracing::debug!(?config, "loaded configuration");

    let service = ParkingService::new();
    let mut stdout = io::stdout().lock();

    match cli.input {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            runner::run(BufReader::new(file), &mut stdout, &service)
        }
        None => runner::run(io::stdin().lock(), &mut stdout, &service),
    }
}
