//! Club reader port (read side).
//!
//! `list_bookings` returns each booking with its member and facility
//! already resolved, so callers never issue per-row lookups.

use crate::domain::club::{BookingView, Facility, Member};
use crate::domain::foundation::{DomainError, MemberId};
use async_trait::async_trait;

/// Reader port for club queries.
#[async_trait]
pub trait ClubReader: Send + Sync {
    /// All bookings with `booked_by` and `facility` eagerly joined,
    /// in booking id order.
    async fn list_bookings(&self) -> Result<Vec<BookingView>, DomainError>;

    /// All facilities.
    async fn list_facilities(&self) -> Result<Vec<Facility>, DomainError>;

    /// All members.
    async fn list_members(&self) -> Result<Vec<Member>, DomainError>;

    /// A single member, `None` if unknown.
    async fn find_member(&self, id: &MemberId) -> Result<Option<Member>, DomainError>;

    /// The sponsor of the given member.
    ///
    /// Returns `None` if the member is unknown or has no sponsor.
    async fn find_sponsor(&self, id: &MemberId) -> Result<Option<Member>, DomainError>;
}
