//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum routes and DTOs
//! - `memory` - In-memory club store
//! - `postgres` - sqlx/PostgreSQL club store

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemoryClubStore;
pub use postgres::{PostgresClubReader, PostgresClubRepository, PostgresClubSchema};
