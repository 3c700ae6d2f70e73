//! HTTP DTOs (Data Transfer Objects) for booking endpoints.
//!
//! Field names use the camelCase wire format of the bookings API, except
//! `first_name`, which keeps its column name.

use crate::domain::club::{BookingView, Facility, Member};
use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A booking with its `bookedBy` member and facility nested.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    /// Booking ID (storage-assigned integer).
    pub id: i32,
    /// Start of the booking (ISO 8601).
    pub start_time: String,
    /// End of the booking (ISO 8601).
    pub end_time: String,
    /// When the booking was created (ISO 8601).
    pub created_at: String,
    /// When the booking was last updated (ISO 8601).
    pub updated_at: String,
    /// ID of the member who made the booking, null if unassigned.
    pub booked_by_id: Option<String>,
    /// ID of the booked facility, null if unassigned.
    pub facility_id: Option<String>,
    /// The member who made the booking, null if unassigned.
    pub booked_by: Option<MemberResponse>,
    /// The booked facility, null if unassigned.
    pub facility: Option<FacilityResponse>,
}

/// Member nested in a booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: String,
    #[serde(rename = "first_name")]
    pub first_name: String,
    /// ID of the sponsoring member, null if unsponsored.
    pub sponsor_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Facility nested in a booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityResponse {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id.to_string(),
            first_name: member.first_name.into(),
            sponsor_id: member.sponsor_id.map(|id| id.to_string()),
            created_at: member.created_at.to_rfc3339(),
            updated_at: member.updated_at.to_rfc3339(),
        }
    }
}

impl From<Facility> for FacilityResponse {
    fn from(facility: Facility) -> Self {
        Self {
            id: facility.id.to_string(),
            name: facility.name.into(),
            created_at: facility.created_at.to_rfc3339(),
            updated_at: facility.updated_at.to_rfc3339(),
        }
    }
}

impl From<BookingView> for BookingResponse {
    fn from(view: BookingView) -> Self {
        let booking = view.booking;
        Self {
            id: booking.id.as_i32(),
            start_time: booking.start_time.to_rfc3339(),
            end_time: booking.end_time.to_rfc3339(),
            created_at: booking.created_at.to_rfc3339(),
            updated_at: booking.updated_at.to_rfc3339(),
            booked_by_id: booking.booked_by_id.map(|id| id.to_string()),
            facility_id: booking.facility_id.map(|id| id.to_string()),
            booked_by: view.booked_by.map(MemberResponse::from),
            facility: view.facility.map(FacilityResponse::from),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::club::{Booking, FacilityName, FirstName, NewBooking};
    use crate::domain::foundation::{BookingId, Timestamp};
    use serde_json::Value;

    fn unassigned_view() -> BookingView {
        let now = Timestamp::now();
        BookingView {
            booking: Booking::from_new(BookingId::from_i32(2), NewBooking::new(now, now), now),
            booked_by: None,
            facility: None,
        }
    }

    #[test]
    fn unassigned_booking_serializes_nulls() {
        let json = serde_json::to_value(BookingResponse::from(unassigned_view())).unwrap();

        assert_eq!(json["id"], 2);
        assert_eq!(json["bookedBy"], Value::Null);
        assert_eq!(json["facility"], Value::Null);
        assert_eq!(json["bookedById"], Value::Null);
        assert_eq!(json["facilityId"], Value::Null);
    }

    #[test]
    fn assigned_booking_nests_member_and_facility() {
        let lucy = Member::new(FirstName::new("lucy").unwrap());
        let tennis = Facility::new(FacilityName::new("tennis").unwrap());
        let mut view = unassigned_view();
        view.booking.assign(lucy.id, tennis.id);
        view.booked_by = Some(lucy.clone());
        view.facility = Some(tennis.clone());

        let json = serde_json::to_value(BookingResponse::from(view)).unwrap();

        assert_eq!(json["bookedById"], lucy.id.to_string());
        assert_eq!(json["facilityId"], tennis.id.to_string());
        assert_eq!(json["bookedBy"]["first_name"], "lucy");
        assert_eq!(json["bookedBy"]["sponsorId"], Value::Null);
        assert_eq!(json["facility"]["name"], "tennis");
    }

    #[test]
    fn booking_response_uses_camel_case_times() {
        let json = serde_json::to_value(BookingResponse::from(unassigned_view())).unwrap();
        let object = json.as_object().unwrap();

        for key in ["startTime", "endTime", "createdAt", "updatedAt"] {
            assert!(object.contains_key(key), "missing {}", key);
        }
        assert!(!object.contains_key("start_time"));
    }

    #[test]
    fn sponsored_member_reports_sponsor_id() {
        let lucy = Member::new(FirstName::new("lucy").unwrap());
        let mut moe = Member::new(FirstName::new("moe").unwrap());
        moe.sponsored_by(lucy.id);

        let response = MemberResponse::from(moe);

        assert_eq!(response.sponsor_id, Some(lucy.id.to_string()));
    }

    #[test]
    fn error_response_new_creates_response() {
        let response = ErrorResponse::new("INTERNAL_ERROR", "Failed to list bookings");
        assert_eq!(response.error_code, "INTERNAL_ERROR");
        assert_eq!(response.message, "Failed to list bookings");
    }
}
