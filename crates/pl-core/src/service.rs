//! The service facade over the single shared parking lot.
//!
//! One [`ParkingService`] instance owns the lot behind a readers-writer lock.
//! It has two states: uninitialized (no lot yet) and active. `create`
//! transitions to active, replacing any prior lot wholesale; `park`, `leave`,
//! and `status` report [`LotError::NoLotCreated`] while uninitialized.

use std::fmt;

use parking_lot::RwLock;
use thiserror::Error;

use crate::charge::charge;
use crate::command::{Command, ParseError};
use crate::lot::{LotError, Occupied, ParkingLot};
use crate::types::Registration;

/// The result of a successful departure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// The departing vehicle's registration.
    pub registration: Registration,

    /// The slot the vehicle held.
    pub slot: u32,

    /// The charge owed, in whole dollars.
    pub charge: u64,
}

/// A user-facing response to one executed command.
///
/// The `Display` impl produces the exact line(s) the driver writes to the
/// primary output stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// A lot was created with the given capacity.
    Created { capacity: u32 },

    /// A slot was assigned.
    Allocated { slot: u32 },

    /// No free slot remained.
    LotFull,

    /// A vehicle departed and was charged.
    Departed(Receipt),

    /// The registration was not parked.
    NotFound { registration: Registration },

    /// All occupied slots, ascending by slot number.
    Status(Vec<Occupied>),

    /// No lot has been created yet.
    NotCreated,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { capacity } => {
                write!(f, "Created parking lot with {capacity} slots")
            }
            Self::Allocated { slot } => write!(f, "Allocated slot number: {slot}"),
            Self::LotFull => write!(f, "Sorry, parking lot is full"),
            Self::Departed(receipt) => write!(
                f,
                "Registration number {} with Slot Number {} free with Charge ${}",
                receipt.registration, receipt.slot, receipt.charge
            ),
            Self::NotFound { registration } => {
                write!(f, "Registration number {registration} not found")
            }
            Self::Status(entries) => {
                write!(f, "Slot No.\tRegistration No.")?;
                for entry in entries {
                    write!(f, "\n{}\t{}", entry.slot, entry.registration)?;
                }
                Ok(())
            }
            Self::NotCreated => write!(f, "Error: Parking lot not created"),
        }
    }
}

/// Errors from [`ParkingService::execute`] that have no user-facing response
/// shape. The driver logs them and skips the line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExecuteError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Lot(#[from] LotError),
}

/// The shared parking lot service.
///
/// `status` takes the read lock and may run concurrently with other readers;
/// `create`, `park`, and `leave` take the write lock so their check-then-act
/// sequences are atomic.
#[derive(Debug, Default)]
pub struct ParkingService {
    lot: RwLock<Option<ParkingLot>>,
}

impl ParkingService {
    /// Creates a service in the uninitialized state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh lot, replacing any prior one.
    ///
    /// This is a full reset: occupants of the previous lot are discarded.
    pub fn create(&self, capacity: u32) -> Result<u32, LotError> {
        let lot = ParkingLot::new(capacity)?;
        *self.lot.write() = Some(lot);
        tracing::debug!(capacity, "created parking lot");
        Ok(capacity)
    }

    /// Parks a vehicle in the lowest-numbered free slot.
    pub fn park(&self, registration: Registration) -> Result<u32, LotError> {
        let mut guard = self.lot.write();
        let lot = guard.as_mut().ok_or(LotError::NoLotCreated)?;
        lot.allocate(registration)
    }

    /// Departs a vehicle, freeing its slot and computing the charge.
    pub fn leave(&self, registration: &Registration, hours: u32) -> Result<Receipt, LotError> {
        let mut guard = self.lot.write();
        let lot = guard.as_mut().ok_or(LotError::NoLotCreated)?;
        let slot = lot.release(registration)?;
        Ok(Receipt {
            registration: registration.clone(),
            slot,
            charge: charge(hours),
        })
    }

    /// All occupied slots, ascending by slot number.
    pub fn status(&self) -> Result<Vec<Occupied>, LotError> {
        let guard = self.lot.read();
        let lot = guard.as_ref().ok_or(LotError::NoLotCreated)?;
        Ok(lot.snapshot())
    }

    /// Parses a token list and executes it against the lot.
    ///
    /// Outcomes with a user-facing shape (`LotFull`, a missing registration,
    /// no lot created yet) come back as `Ok(Response)`; parse failures and
    /// double-park attempts come back as `Err` for the driver to log.
    pub fn execute(&self, args: &[&str]) -> Result<Response, ExecuteError> {
        match Command::parse(args)? {
            Command::Create { capacity } => {
                let capacity = self.create(capacity)?;
                Ok(Response::Created { capacity })
            }
            Command::Park { registration } => match self.park(registration) {
                Ok(slot) => Ok(Response::Allocated { slot }),
                Err(LotError::LotFull) => Ok(Response::LotFull),
                Err(LotError::NoLotCreated) => Ok(Response::NotCreated),
                Err(err) => Err(err.into()),
            },
            Command::Leave {
                registration,
                hours,
            } => match self.leave(&registration, hours) {
                Ok(receipt) => Ok(Response::Departed(receipt)),
                Err(LotError::OccupantNotFound(registration)) => {
                    Ok(Response::NotFound { registration })
                }
                Err(LotError::NoLotCreated) => Ok(Response::NotCreated),
                Err(err) => Err(err.into()),
            },
            Command::Status => match self.status() {
                Ok(entries) => Ok(Response::Status(entries)),
                Err(LotError::NoLotCreated) => Ok(Response::NotCreated),
                Err(err) => Err(err.into()),
            },
        }
    }
}
