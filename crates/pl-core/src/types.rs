//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
}

/// A validated vehicle registration number.
///
/// Registrations must be non-empty strings (e.g., "KA-01-HH-1234"). They
/// identify occupants and must be unique among currently parked vehicles;
/// uniqueness is enforced by the allocator, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Registration(String);

impl Registration {
    /// Creates a new registration after validation.
    pub fn new(registration: impl Into<String>) -> Result<Self, ValidationError> {
        let registration = registration.into();
        if registration.is_empty() {
            return Err(ValidationError::Empty {
                field: "registration",
            });
        }
        Ok(Self(registration))
    }

    /// Returns the registration as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Registration {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Registration> for String {
    fn from(registration: Registration) -> Self {
        registration.0
    }
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Registration {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
