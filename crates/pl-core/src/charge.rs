//! Charge calculation.

/// Flat charge for any stay up to and including [`BASE_HOURS`].
const BASE_CHARGE: u64 = 10;

/// Hours covered by the flat charge.
const BASE_HOURS: u64 = 2;

/// Charge per whole hour beyond [`BASE_HOURS`].
const HOURLY_RATE: u64 = 10;

/// Computes the charge for a stay of `hours` whole hours.
///
/// Flat 10 for the first two hours, then 10 per additional hour. Callers are
/// responsible for rejecting `hours < 1` before calling. The result is
/// computed in `u64` so the full `u32` range of hours cannot overflow.
#[must_use]
pub fn charge(hours: u32) -> u64 {
    let hours = u64::from(hours);
    if hours <= BASE_HOURS {
        BASE_CHARGE
    } else {
        BASE_CHARGE + (hours - BASE_HOURS) * HOURLY_RATE
    }
}
