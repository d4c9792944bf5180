//! Parsing of pre-tokenized command lines.
//!
//! The driver splits each input line on whitespace and hands the token list
//! to [`Command::parse`]. Arity is checked here exactly, independently of the
//! driver-side validator.

use thiserror::Error;

use crate::types::{Registration, ValidationError};

/// A well-formed parking lot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `create_parking_lot <capacity>`
    Create { capacity: u32 },

    /// `park <registration>`
    Park { registration: Registration },

    /// `leave <registration> <hours>`
    Leave {
        registration: Registration,
        hours: u32,
    },

    /// `status`
    Status,
}

/// Errors raised while parsing a token list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The token list was empty.
    #[error("empty command")]
    Empty,

    /// The first token is not a known command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The command received the wrong number of arguments.
    #[error("{command} takes {expected} argument(s), got {got}")]
    Arity {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    /// Capacity was not a positive integer.
    #[error("invalid capacity: {0}")]
    InvalidCapacity(String),

    /// Hours was not an integer of at least 1.
    #[error("invalid hours: {0}")]
    InvalidHours(String),

    /// An argument failed type-level validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Command {
    /// Parses a whitespace-tokenized command line.
    pub fn parse(args: &[&str]) -> Result<Self, ParseError> {
        let (&command, rest) = args.split_first().ok_or(ParseError::Empty)?;
        match command {
            "create_parking_lot" => {
                expect_arity("create_parking_lot", rest, 1)?;
                let capacity = rest[0]
                    .parse()
                    .ok()
                    .filter(|&capacity| capacity > 0)
                    .ok_or_else(|| ParseError::InvalidCapacity(rest[0].to_string()))?;
                Ok(Self::Create { capacity })
            }
            "park" => {
                expect_arity("park", rest, 1)?;
                Ok(Self::Park {
                    registration: Registration::new(rest[0])?,
                })
            }
            "leave" => {
                expect_arity("leave", rest, 2)?;
                let registration = Registration::new(rest[0])?;
                let hours = rest[1]
                    .parse()
                    .ok()
                    .filter(|&hours| hours >= 1)
                    .ok_or_else(|| ParseError::InvalidHours(rest[1].to_string()))?;
                Ok(Self::Leave {
                    registration,
                    hours,
                })
            }
            "status" => {
                expect_arity("status", rest, 0)?;
                Ok(Self::Status)
            }
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

fn expect_arity(command: &'static str, rest: &[&str], expected: usize) -> Result<(), ParseError> {
    if rest.len() == expected {
        Ok(())
    } else {
        Err(ParseError::Arity {
            command,
            expected,
            got: rest.len(),
        })
    }
}
