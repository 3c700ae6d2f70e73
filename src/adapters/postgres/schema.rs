//! PostgreSQL implementation of ClubSchema.
//!
//! The reset drops and recreates the three club tables inside a single
//! transaction, so a failure leaves the previous schema in place.

use crate::domain::foundation::DomainError;
use crate::ports::ClubSchema;
use async_trait::async_trait;
use sqlx::PgPool;

/// Statements run in order by `reset`.
const RESET_STATEMENTS: &[&str] = &[
    "DROP TABLE IF EXISTS bookings CASCADE",
    "DROP TABLE IF EXISTS members CASCADE",
    "DROP TABLE IF EXISTS facilities CASCADE",
    r#"
    CREATE TABLE facilities (
        id          UUID PRIMARY KEY,
        name        VARCHAR(100) NOT NULL UNIQUE,
        created_at  TIMESTAMPTZ NOT NULL,
        updated_at  TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE TABLE members (
        id          UUID PRIMARY KEY,
        first_name  VARCHAR(20) NOT NULL UNIQUE,
        sponsor_id  UUID REFERENCES members(id) ON DELETE SET NULL ON UPDATE CASCADE,
        created_at  TIMESTAMPTZ NOT NULL,
        updated_at  TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE TABLE bookings (
        id            SERIAL PRIMARY KEY,
        start_time    TIMESTAMPTZ NOT NULL,
        end_time      TIMESTAMPTZ NOT NULL,
        booked_by_id  UUID REFERENCES members(id) ON DELETE SET NULL ON UPDATE CASCADE,
        facility_id   UUID REFERENCES facilities(id) ON DELETE SET NULL ON UPDATE CASCADE,
        created_at    TIMESTAMPTZ NOT NULL,
        updated_at    TIMESTAMPTZ NOT NULL
    )
    "#,
];

/// PostgreSQL implementation of the ClubSchema port.
pub struct PostgresClubSchema {
    pool: PgPool,
}

impl PostgresClubSchema {
    /// Creates a new PostgresClubSchema with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClubSchema for PostgresClubSchema {
    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to reach database", e))?;
        Ok(())
    }

    async fn reset(&self) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin schema reset", e))?;

        for statement in RESET_STATEMENTS {
            sqlx::query(statement)
                .execute(&mut *tx)
                .await
                .map_err(|e| DomainError::database("Failed to reset schema", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit schema reset", e))?;

        tracing::debug!("Club schema recreated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_drops_before_creating() {
        let first_create = RESET_STATEMENTS
            .iter()
            .position(|s| s.contains("CREATE TABLE"))
            .unwrap();
        assert!(RESET_STATEMENTS[..first_create]
            .iter()
            .all(|s| s.starts_with("DROP TABLE IF EXISTS")));
    }

    #[test]
    fn referenced_tables_are_created_first() {
        let position = |needle: &str| {
            RESET_STATEMENTS
                .iter()
                .position(|s| s.contains(needle))
                .unwrap()
        };
        assert!(position("CREATE TABLE facilities") < position("CREATE TABLE bookings"));
        assert!(position("CREATE TABLE members") < position("CREATE TABLE bookings"));
    }

    #[test]
    fn name_columns_carry_bounds_and_uniqueness() {
        let ddl = RESET_STATEMENTS.join("\n");
        assert!(ddl.contains("name        VARCHAR(100) NOT NULL UNIQUE"));
        assert!(ddl.contains("first_name  VARCHAR(20) NOT NULL UNIQUE"));
    }
}
