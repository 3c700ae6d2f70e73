//! Club handlers.
//!
//! ## Commands
//! - Resetting storage and loading the seed data
//!
//! ## Queries
//! - List bookings with member and facility resolved
//! - Get a member's sponsor

mod get_sponsor;
mod list_bookings;
mod seed_club;

// Commands
pub use seed_club::{
    SeedClubCommand, SeedClubHandler, SeedClubResult, SEED_BOOKING_COUNT, SEED_FACILITIES,
    SEED_MEMBERS,
};

// Queries
pub use get_sponsor::{GetSponsorHandler, GetSponsorQuery, GetSponsorResult};
pub use list_bookings::{ListBookingsHandler, ListBookingsQuery, ListBookingsResult};
