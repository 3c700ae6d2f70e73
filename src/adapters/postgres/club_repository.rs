//! PostgreSQL implementation of ClubRepository.
//!
//! Provides inserts and the sponsor / booking assignments using sqlx.

use crate::domain::club::{Booking, Facility, Member, NewBooking};
use crate::domain::foundation::{
    BookingId, DomainError, ErrorCode, FacilityId, MemberId, Timestamp,
};
use crate::ports::ClubRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// PostgreSQL implementation of the ClubRepository port.
///
/// Uses sqlx with connection pooling; each call is independent so inserts
/// for unrelated rows can run concurrently.
pub struct PostgresClubRepository {
    pool: PgPool,
}

impl PostgresClubRepository {
    /// Creates a new PostgresClubRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Maps constraint violations to domain codes, everything else to `DatabaseError`.
fn map_write_error(context: &str, err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return DomainError::new(ErrorCode::Conflict, format!("{}: {}", context, db_err));
        }
        if db_err.is_foreign_key_violation() {
            return DomainError::new(ErrorCode::NotFound, format!("{}: {}", context, db_err));
        }
    }
    DomainError::database(context, err)
}

fn utc(ts: &Timestamp) -> DateTime<Utc> {
    *ts.as_datetime()
}

#[async_trait]
impl ClubRepository for PostgresClubRepository {
    async fn create_facility(&self, facility: &Facility) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO facilities (id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(facility.id.as_uuid())
        .bind(facility.name.as_str())
        .bind(utc(&facility.created_at))
        .bind(utc(&facility.updated_at))
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error("Failed to create facility", e))?;

        Ok(())
    }

    async fn create_member(&self, member: &Member) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO members (id, first_name, sponsor_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(member.id.as_uuid())
        .bind(member.first_name.as_str())
        .bind(member.sponsor_id.map(|id| *id.as_uuid()))
        .bind(utc(&member.created_at))
        .bind(utc(&member.updated_at))
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error("Failed to create member", e))?;

        Ok(())
    }

    async fn create_booking(&self, booking: NewBooking) -> Result<Booking, DomainError> {
        let created_at = Timestamp::now();

        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO bookings (start_time, end_time, created_at, updated_at)
            VALUES ($1, $2, $3, $3)
            RETURNING id
            "#,
        )
        .bind(utc(&booking.start_time))
        .bind(utc(&booking.end_time))
        .bind(utc(&created_at))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error("Failed to create booking", e))?;

        Ok(Booking::from_new(BookingId::from_i32(id), booking, created_at))
    }

    async fn assign_sponsor(&self, member: MemberId, sponsor: MemberId) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE members
            SET sponsor_id = $2, updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(member.as_uuid())
        .bind(sponsor.as_uuid())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error("Failed to assign sponsor", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::NotFound,
                format!("Member {} not found", member),
            ));
        }

        Ok(())
    }

    async fn assign_booking(
        &self,
        booking: BookingId,
        member: MemberId,
        facility: FacilityId,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE bookings
            SET booked_by_id = $2, facility_id = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(booking.as_i32())
        .bind(member.as_uuid())
        .bind(facility.as_uuid())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error("Failed to assign booking", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::NotFound,
                format!("Booking {} not found", booking),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_map_to_database_error() {
        let err = map_write_error("Failed to create member", sqlx::Error::RowNotFound);
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(err.message.starts_with("Failed to create member"));
    }

    #[test]
    fn pool_timeout_maps_to_database_error() {
        let err = map_write_error("Failed to create booking", sqlx::Error::PoolTimedOut);
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
