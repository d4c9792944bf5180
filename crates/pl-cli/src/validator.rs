//! Pre-execution command validation.
//!
//! A table-driven arity check that runs before the token list reaches the
//! core. The core re-checks arity on its own; this layer exists so malformed
//! lines are caught and logged with a usage hint before any lot state is
//! touched.

use thiserror::Error;

/// Known commands with their usage string and exact argument count.
const COMMANDS: &[(&str, &str, usize)] = &[
    ("create_parking_lot", "create_parking_lot <capacity>", 1),
    ("park", "park <registration>", 1),
    ("leave", "leave <registration> <hours>", 2),
    ("status", "status", 0),
];

/// A command line rejected before execution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidateError {
    /// The line contained no tokens.
    #[error("empty command")]
    Empty,

    /// The first token is not a known command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The argument count does not match the command's usage.
    #[error("{command} takes {expected} argument(s), got {got}; usage: {usage}")]
    Arity {
        command: &'static str,
        usage: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Checks that a token list names a known command with the right arity.
pub fn validate(args: &[&str]) -> Result<(), ValidateError> {
    let Some((&command, rest)) = args.split_first() else {
        return Err(ValidateError::Empty);
    };
    let Some(&(name, usage, expected)) = COMMANDS.iter().find(|(name, ..)| *name == command)
    else {
        return Err(ValidateError::UnknownCommand(command.to_string()));
    };
    if rest.len() == expected {
        Ok(())
    } else {
        Err(ValidateError::Arity {
            command: name,
            usage,
            expected,
            got: rest.len(),
        })
    }
}
