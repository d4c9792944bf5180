//! Parking lot simulator CLI library.
//!
//! This crate provides the line-oriented command driver around `pl-core`.

mod cli;
mod config;
pub mod runner;
pub mod validator;

pub use cli::Cli;
pub use config::Config;
