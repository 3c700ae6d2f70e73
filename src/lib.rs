//! Country Club - facilities, members and bookings.
//!
//! On startup the service resets the club schema, seeds a fixed set of
//! facilities, members and bookings, and serves them read-only at
//! `GET /api/bookings`.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod server;
