//! Slot allocation for a single parking lot.
//!
//! The free-set is a binary min-heap keyed by slot identifier, so an arriving
//! vehicle always receives the lowest-numbered free slot in O(log N). A
//! parallel registration-to-slot index makes departures O(log N) as well.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use thiserror::Error;

use crate::types::Registration;

/// Failures local to the lot and its allocator.
///
/// All variants are recoverable conditions returned to the caller; none
/// unwind past the service facade.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LotError {
    /// The requested capacity was not a positive integer.
    #[error("capacity must be a positive integer")]
    InvalidCapacity,

    /// No free slot remains.
    #[error("parking lot is full")]
    LotFull,

    /// The registration has no current slot assignment.
    #[error("registration {0} not found")]
    OccupantNotFound(Registration),

    /// The registration already holds a slot.
    #[error("registration {0} is already parked")]
    AlreadyParked(Registration),

    /// No lot has been created yet.
    #[error("parking lot not created")]
    NoLotCreated,
}

/// One occupied slot in a status snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupied {
    /// The slot identifier, in 1..=capacity.
    pub slot: u32,

    /// The registration of the vehicle holding the slot.
    pub registration: Registration,
}

/// A parking lot with a fixed set of slots numbered 1..=capacity.
///
/// Invariant: the free heap and the occupant index partition the identifier
/// range at all times. Both structures are only mutated together, under the
/// single `&mut` borrow of [`allocate`](Self::allocate) and
/// [`release`](Self::release).
#[derive(Debug)]
pub struct ParkingLot {
    capacity: u32,
    free: BinaryHeap<Reverse<u32>>,
    occupants: HashMap<Registration, u32>,
}

impl ParkingLot {
    /// Creates a lot with all slots 1..=capacity free.
    ///
    /// Capacity is fixed for the lifetime of the lot.
    pub fn new(capacity: u32) -> Result<Self, LotError> {
        if capacity == 0 {
            return Err(LotError::InvalidCapacity);
        }
        Ok(Self {
            capacity,
            free: (1..=capacity).map(Reverse).collect(),
            occupants: HashMap::new(),
        })
    }

    /// The fixed number of slots.
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// The number of currently free slots.
    pub fn available(&self) -> usize {
        self.free.len()
    }

    /// Assigns the lowest-numbered free slot to `registration`.
    ///
    /// A registration that already holds a slot is rejected rather than
    /// silently reassigned.
    pub fn allocate(&mut self, registration: Registration) -> Result<u32, LotError> {
        if self.occupants.contains_key(&registration) {
            return Err(LotError::AlreadyParked(registration));
        }
        let Some(Reverse(slot)) = self.free.pop() else {
            return Err(LotError::LotFull);
        };
        tracing::debug!(slot, registration = %registration, "allocated slot");
        self.occupants.insert(registration, slot);
        Ok(slot)
    }

    /// Frees the slot held by `registration` and returns its identifier.
    ///
    /// The lot is unchanged when the registration is not found.
    pub fn release(&mut self, registration: &Registration) -> Result<u32, LotError> {
        let Some(slot) = self.occupants.remove(registration) else {
            return Err(LotError::OccupantNotFound(registration.clone()));
        };
        self.free.push(Reverse(slot));
        tracing::debug!(slot, registration = %registration, "released slot");
        Ok(slot)
    }

    /// All occupied slots, ordered ascending by slot identifier.
    pub fn snapshot(&self) -> Vec<Occupied> {
        let mut entries: Vec<Occupied> = self
            .occupants
            .iter()
            .map(|(registration, &slot)| Occupied {
                slot,
                registration: registration.clone(),
            })
            .collect();
        entries.sort_unstable_by_key(|entry| entry.slot);
        entries
    }
}
