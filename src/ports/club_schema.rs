//! Club schema port.
//!
//! Owns the lifecycle of the storage schema for facilities, members and
//! bookings. `reset` is destructive: every existing row is dropped.

use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Port for checking storage connectivity and recreating the schema.
#[async_trait]
pub trait ClubSchema: Send + Sync {
    /// Verify that storage is reachable.
    async fn ping(&self) -> Result<(), DomainError>;

    /// Drop all club tables and recreate them empty.
    ///
    /// Running it twice in a row must succeed and leave empty tables.
    async fn reset(&self) -> Result<(), DomainError>;
}
