//! Facility entity.

use crate::domain::foundation::{FacilityId, Timestamp};
use serde::{Deserialize, Serialize};

use super::FacilityName;

/// A bookable club resource such as a court or a field.
///
/// # Invariants
///
/// - `name` is unique across all facilities (enforced by storage)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    pub id: FacilityId,
    pub name: FacilityName,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Facility {
    /// Creates a new facility with a fresh id.
    pub fn new(name: FacilityName) -> Self {
        let now = Timestamp::now();
        Self {
            id: FacilityId::new(),
            name,
            created_at: now,
            updated_at: now,
        }
    }
}
