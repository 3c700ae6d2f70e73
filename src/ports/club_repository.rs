//! Club repository port (write side).
//!
//! Inserts and links facilities, members and bookings. There are no
//! update or delete operations beyond the two assignments the seed needs.

use crate::domain::club::{Booking, Facility, Member, NewBooking};
use crate::domain::foundation::{BookingId, DomainError, FacilityId, MemberId};
use async_trait::async_trait;

/// Repository port for club writes.
#[async_trait]
pub trait ClubRepository: Send + Sync {
    /// Insert a facility.
    ///
    /// # Errors
    ///
    /// - `Conflict` if a facility with the same name exists
    async fn create_facility(&self, facility: &Facility) -> Result<(), DomainError>;

    /// Insert a member.
    ///
    /// # Errors
    ///
    /// - `Conflict` if a member with the same first name exists
    async fn create_member(&self, member: &Member) -> Result<(), DomainError>;

    /// Insert a booking; storage assigns and returns its id.
    async fn create_booking(&self, booking: NewBooking) -> Result<Booking, DomainError>;

    /// Set `member`'s sponsor.
    ///
    /// # Errors
    ///
    /// - `NotFound` if either member does not exist
    async fn assign_sponsor(&self, member: MemberId, sponsor: MemberId) -> Result<(), DomainError>;

    /// Link a booking to the member who made it and the facility booked.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the booking, member or facility does not exist
    async fn assign_booking(
        &self,
        booking: BookingId,
        member: MemberId,
        facility: FacilityId,
    ) -> Result<(), DomainError>;
}
