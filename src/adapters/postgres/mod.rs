//! PostgreSQL adapters - Database implementations for the club ports.
//!
//! - `PostgresClubSchema` - Connectivity check and destructive schema reset
//! - `PostgresClubRepository` - Inserts and assignments
//! - `PostgresClubReader` - Joined booking query and lookups

mod club_reader;
mod club_repository;
mod schema;

pub use club_reader::PostgresClubReader;
pub use club_repository::PostgresClubRepository;
pub use schema::PostgresClubSchema;
