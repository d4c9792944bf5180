//! Core domain logic for the parking lot simulator.
//!
//! This crate contains the fundamental types and logic for:
//! - Slot allocation: always the lowest-numbered free slot, in O(log N)
//! - Charge calculation: a step function of parked duration in whole hours
//! - Command parsing: pre-tokenized command lists into typed commands
//! - The service facade: one shared lot behind a readers-writer lock

mod charge;
mod command;
mod lot;
mod service;
mod types;

pub use charge::charge;
pub use command::{Command, ParseError};
pub use lot::{LotError, Occupied, ParkingLot};
pub use service::{ExecuteError, ParkingService, Receipt, Response};
pub use types::{Registration, ValidationError};
