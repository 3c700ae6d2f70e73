//! Club domain module.
//!
//! Facilities, members and the bookings that link them.
//!
//! # Module Structure
//!
//! - `names` - Bounded name value objects
//! - `facility` - Facility entity
//! - `member` - Member entity with optional sponsor
//! - `booking` - Booking entity and joined `BookingView`

mod booking;
mod facility;
mod member;
mod names;

pub use booking::{Booking, BookingView, NewBooking};
pub use facility::Facility;
pub use member::Member;
pub use names::{FacilityName, FirstName};
