//! Domain layer - Entities, value objects and errors.
//!
//! - `foundation` - Identifiers, timestamps and error types
//! - `club` - Facilities, members and bookings

pub mod club;
pub mod foundation;
