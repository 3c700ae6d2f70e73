//! HTTP adapter for booking endpoints.
//!
//! Exposes the club bookings via REST API:
//! - `GET /api/bookings` - All bookings with `bookedBy` member and facility

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{list_bookings, BookingApiError, BookingAppState};
pub use routes::{booking_router, booking_routes};
