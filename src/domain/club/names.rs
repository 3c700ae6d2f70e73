//! Name value objects with the column bounds of the club tables.
//!
//! Lengths are counted in characters, matching `VARCHAR(n)` semantics.

use crate::domain::foundation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A facility name: non-empty, at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FacilityName(String);

impl FacilityName {
    pub const MAX_LEN: usize = 100;

    /// Creates a facility name, rejecting empty or over-long input.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        bounded("name", name.into(), Self::MAX_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A member's first name: non-empty, at most 20 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FirstName(String);

impl FirstName {
    pub const MAX_LEN: usize = 20;

    /// Creates a first name, rejecting empty or over-long input.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        bounded("first_name", name.into(), Self::MAX_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn bounded(field: &str, value: String, max: usize) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::too_long(field, max, len));
    }
    Ok(value)
}

impl TryFrom<String> for FacilityName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FacilityName> for String {
    fn from(name: FacilityName) -> Self {
        name.0
    }
}

impl TryFrom<String> for FirstName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FirstName> for String {
    fn from(name: FirstName) -> Self {
        name.0
    }
}

impl fmt::Display for FacilityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for FirstName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
