//! In-Memory Club Store Adapter
//!
//! Keeps facilities, members and bookings in memory and implements all
//! three club ports. Enforces the same uniqueness and reference rules as
//! the Postgres schema. Useful for testing and local runs without a
//! database.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::club::{Booking, BookingView, Facility, Member, NewBooking};
use crate::domain::foundation::{
    BookingId, DomainError, ErrorCode, FacilityId, MemberId, Timestamp,
};
use crate::ports::{ClubReader, ClubRepository, ClubSchema};

#[derive(Debug, Default)]
struct ClubTables {
    facilities: Vec<Facility>,
    members: Vec<Member>,
    bookings: Vec<Booking>,
    next_booking_id: i32,
}

impl ClubTables {
    fn facility(&self, id: &FacilityId) -> Option<&Facility> {
        self.facilities.iter().find(|f| &f.id == id)
    }

    fn member(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|m| &m.id == id)
    }
}

/// In-memory implementation of the club ports.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClubStore {
    tables: Arc<RwLock<ClubTables>>,
}

impl InMemoryClubStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored bookings.
    pub async fn booking_count(&self) -> usize {
        self.tables.read().await.bookings.len()
    }
}

fn not_found(what: &str, id: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::NotFound, format!("{} {} not found", what, id))
}

#[async_trait]
impl ClubSchema for InMemoryClubStore {
    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }

    async fn reset(&self) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        *tables = ClubTables::default();
        Ok(())
    }
}

#[async_trait]
impl ClubRepository for InMemoryClubStore {
    async fn create_facility(&self, facility: &Facility) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if tables.facilities.iter().any(|f| f.name == facility.name) {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                format!("Facility name '{}' already exists", facility.name),
            )
            .with_detail("table", "facilities"));
        }
        tables.facilities.push(facility.clone());
        Ok(())
    }

    async fn create_member(&self, member: &Member) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if tables.members.iter().any(|m| m.first_name == member.first_name) {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                format!("Member first name '{}' already exists", member.first_name),
            )
            .with_detail("table", "members"));
        }
        if let Some(sponsor) = member.sponsor_id {
            if sponsor != member.id && tables.member(&sponsor).is_none() {
                return Err(not_found("Sponsor", sponsor));
            }
        }
        tables.members.push(member.clone());
        Ok(())
    }

    async fn create_booking(&self, booking: NewBooking) -> Result<Booking, DomainError> {
        let mut tables = self.tables.write().await;
        tables.next_booking_id += 1;
        let id = BookingId::from_i32(tables.next_booking_id);
        let booking = Booking::from_new(id, booking, Timestamp::now());
        tables.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn assign_sponsor(&self, member: MemberId, sponsor: MemberId) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if tables.member(&sponsor).is_none() {
            return Err(not_found("Sponsor", sponsor));
        }
        let target = tables
            .members
            .iter_mut()
            .find(|m| m.id == member)
            .ok_or_else(|| not_found("Member", member))?;
        target.sponsored_by(sponsor);
        Ok(())
    }

    async fn assign_booking(
        &self,
        booking: BookingId,
        member: MemberId,
        facility: FacilityId,
    ) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if tables.member(&member).is_none() {
            return Err(not_found("Member", member));
        }
        if tables.facility(&facility).is_none() {
            return Err(not_found("Facility", facility));
        }
        let target = tables
            .bookings
            .iter_mut()
            .find(|b| b.id == booking)
            .ok_or_else(|| not_found("Booking", booking))?;
        target.assign(member, facility);
        Ok(())
    }
}

#[async_trait]
impl ClubReader for InMemoryClubStore {
    async fn list_bookings(&self) -> Result<Vec<BookingView>, DomainError> {
        let tables = self.tables.read().await;
        let mut bookings = tables.bookings.clone();
        bookings.sort_by_key(|b| b.id);

        Ok(bookings
            .into_iter()
            .map(|booking| BookingView {
                booked_by: booking
                    .booked_by_id
                    .and_then(|id| tables.member(&id).cloned()),
                facility: booking
                    .facility_id
                    .and_then(|id| tables.facility(&id).cloned()),
                booking,
            })
            .collect())
    }

    async fn list_facilities(&self) -> Result<Vec<Facility>, DomainError> {
        Ok(self.tables.read().await.facilities.clone())
    }

    async fn list_members(&self) -> Result<Vec<Member>, DomainError> {
        Ok(self.tables.read().await.members.clone())
    }

    async fn find_member(&self, id: &MemberId) -> Result<Option<Member>, DomainError> {
        Ok(self.tables.read().await.member(id).cloned())
    }

    async fn find_sponsor(&self, id: &MemberId) -> Result<Option<Member>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .member(id)
            .and_then(|m| m.sponsor_id)
            .and_then(|sponsor| tables.member(&sponsor).cloned()))
    }
}
