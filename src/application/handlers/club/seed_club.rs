//! SeedClubHandler - Command handler that resets storage and loads the
//! fixed demo data.
//!
//! Phases, each awaited before the next starts:
//! 1. destructive schema reset
//! 2. facilities, members and bookings inserted (rows within a phase run
//!    concurrently)
//! 3. `moe`'s sponsor and the first booking assigned, concurrently
//!
//! Only the first booking is assigned; the other two stay unassigned.

use std::sync::Arc;

use futures::future::try_join_all;

use crate::domain::club::{Booking, Facility, FacilityName, FirstName, Member, NewBooking};
use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::{ClubRepository, ClubSchema};

/// Facility names in seed order.
pub const SEED_FACILITIES: [&str; 3] = ["tennis", "golf", "basketball"];

/// Member first names in seed order.
pub const SEED_MEMBERS: [&str; 3] = ["lucy", "moe", "larry"];

/// Number of seeded bookings.
pub const SEED_BOOKING_COUNT: usize = 3;

/// Command to reset and seed the club.
#[derive(Debug, Clone, Copy)]
pub struct SeedClubCommand {
    /// Start and end time of every seeded booking.
    pub booked_at: Timestamp,
}

impl Default for SeedClubCommand {
    fn default() -> Self {
        Self {
            booked_at: Timestamp::now(),
        }
    }
}

/// Rows created by a successful seed, in seed order.
#[derive(Debug, Clone)]
pub struct SeedClubResult {
    pub facilities: Vec<Facility>,
    pub members: Vec<Member>,
    pub bookings: Vec<Booking>,
}

/// Handler for resetting and seeding club storage.
pub struct SeedClubHandler {
    schema: Arc<dyn ClubSchema>,
    repository: Arc<dyn ClubRepository>,
}

impl SeedClubHandler {
    pub fn new(schema: Arc<dyn ClubSchema>, repository: Arc<dyn ClubRepository>) -> Self {
        Self { schema, repository }
    }

    pub async fn handle(&self, cmd: SeedClubCommand) -> Result<SeedClubResult, DomainError> {
        self.schema.reset().await?;

        let facilities = SEED_FACILITIES
            .iter()
            .map(|name| FacilityName::new(*name).map(Facility::new))
            .collect::<Result<Vec<_>, _>>()?;
        try_join_all(facilities.iter().map(|f| self.repository.create_facility(f))).await?;
        tracing::debug!(count = facilities.len(), "Seeded facilities");

        let mut members = SEED_MEMBERS
            .iter()
            .map(|name| FirstName::new(*name).map(Member::new))
            .collect::<Result<Vec<_>, _>>()?;
        try_join_all(members.iter().map(|m| self.repository.create_member(m))).await?;
        tracing::debug!(count = members.len(), "Seeded members");

        let new_booking = NewBooking::new(cmd.booked_at, cmd.booked_at);
        let mut bookings = try_join_all(
            (0..SEED_BOOKING_COUNT).map(|_| self.repository.create_booking(new_booking)),
        )
        .await?;
        // Concurrent inserts finish in any order; the first booking is the lowest id.
        bookings.sort_by_key(|b| b.id);
        tracing::debug!(count = bookings.len(), "Seeded bookings");

        let lucy = members[0].id;
        let moe = members[1].id;
        let tennis = facilities[0].id;
        let first_booking = bookings[0].id;

        futures::try_join!(
            self.repository.assign_sponsor(moe, lucy),
            self.repository.assign_booking(first_booking, lucy, tennis),
        )?;
        members[1].sponsored_by(lucy);
        bookings[0].assign(lucy, tennis);

        tracing::info!(
            facilities = facilities.len(),
            members = members.len(),
            bookings = bookings.len(),
            "Club storage reset and seeded"
        );

        Ok(SeedClubResult {
            facilities,
            members,
            bookings,
        })
    }
}
