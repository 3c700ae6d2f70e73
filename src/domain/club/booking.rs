//! Booking entity and its joined read view.
//!
//! Time ranges are stored as given: neither ordering nor overlap with
//! other bookings is checked.

use crate::domain::foundation::{BookingId, FacilityId, MemberId, Timestamp};
use serde::{Deserialize, Serialize};

use super::{Facility, Member};

/// Data needed to insert a booking; storage assigns the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewBooking {
    pub start_time: Timestamp,
    pub end_time: Timestamp,
}

impl NewBooking {
    pub fn new(start_time: Timestamp, end_time: Timestamp) -> Self {
        Self {
            start_time,
            end_time,
        }
    }
}

/// A reservation of a facility by a member.
///
/// `booked_by_id` and `facility_id` are unset until the booking is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub booked_by_id: Option<MemberId>,
    pub facility_id: Option<FacilityId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Booking {
    /// Builds an unassigned booking from insert data and its assigned id.
    pub fn from_new(id: BookingId, new: NewBooking, created_at: Timestamp) -> Self {
        Self {
            id,
            start_time: new.start_time,
            end_time: new.end_time,
            booked_by_id: None,
            facility_id: None,
            created_at,
            updated_at: created_at,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.booked_by_id.is_some() && self.facility_id.is_some()
    }

    /// Links the booking to the member who made it and the facility booked.
    pub fn assign(&mut self, member: MemberId, facility: FacilityId) {
        self.booked_by_id = Some(member);
        self.facility_id = Some(facility);
        self.updated_at = Timestamp::now();
    }
}

/// A booking with its member and facility resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingView {
    pub booking: Booking,
    pub booked_by: Option<Member>,
    pub facility: Option<Facility>,
}
