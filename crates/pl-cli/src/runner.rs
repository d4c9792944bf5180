//! The line-oriented command runner.
//!
//! Reads commands one line at a time, validates them, executes them against
//! the shared [`ParkingService`], and writes one response per executed
//! command to the primary writer. Malformed lines are logged at debug level
//! and skipped; only a read error on the input stream (or a write error on
//! the primary stream) aborts the run.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use pl_core::ParkingService;

use crate::validator;

pub fn run<R: BufRead, W: Write>(reader: R, writer: &mut W, service: &ParkingService) -> Result<()> {
    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.with_context(|| format!("failed to read input line {number}"))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        tracing::debug!(line = %line, number, "executing command");
        let args: Vec<&str> = line.split_whitespace().collect();

        if let Err(err) = validator::validate(&args) {
            tracing::debug!(number, %err, "skipping invalid command");
            continue;
        }

        match service.execute(&args) {
            Ok(response) => writeln!(writer, "{response}")
                .with_context(|| format!("failed to write response for line {number}"))?,
            Err(err) => tracing::debug!(number, %err, "command rejected"),
        }
    }

    Ok(())
}
