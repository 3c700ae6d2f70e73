//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and storage. Adapters implement these ports.
//!
//! - `ClubSchema` - Connectivity check and destructive schema reset
//! - `ClubRepository` - Inserts and assignments
//! - `ClubReader` - Joined booking queries and lookups

mod club_reader;
mod club_repository;
mod club_schema;

pub use club_reader::ClubReader;
pub use club_repository::ClubRepository;
pub use club_schema::ClubSchema;
