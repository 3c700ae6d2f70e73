//! In-memory adapters.
//!
//! - **InMemoryClubStore** - Implements `ClubSchema`, `ClubRepository` and
//!   `ClubReader` without a database (testing/development)

mod in_memory_club_store;

pub use in_memory_club_store::InMemoryClubStore;
