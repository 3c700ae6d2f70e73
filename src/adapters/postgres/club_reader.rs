//! PostgreSQL implementation of ClubReader.
//!
//! Bookings are read with one LEFT JOIN query so that unassigned bookings
//! still come back, with their member and facility columns all NULL.

use crate::domain::club::{Booking, BookingView, Facility, FacilityName, FirstName, Member};
use crate::domain::foundation::{
    BookingId, DomainError, ErrorCode, FacilityId, MemberId, Timestamp,
};
use crate::ports::ClubReader;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the ClubReader port.
pub struct PostgresClubReader {
    pool: PgPool,
}

impl PostgresClubReader {
    /// Creates a new PostgresClubReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row for the joined booking query.
#[derive(Debug, sqlx::FromRow)]
struct BookingJoinRow {
    id: i32,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    booked_by_id: Option<Uuid>,
    facility_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    member_id: Option<Uuid>,
    member_first_name: Option<String>,
    member_sponsor_id: Option<Uuid>,
    member_created_at: Option<DateTime<Utc>>,
    member_updated_at: Option<DateTime<Utc>>,
    facility_row_id: Option<Uuid>,
    facility_name: Option<String>,
    facility_created_at: Option<DateTime<Utc>>,
    facility_updated_at: Option<DateTime<Utc>>,
}

/// Row for member queries.
#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    id: Uuid,
    first_name: String,
    sponsor_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Row for facility queries.
#[derive(Debug, sqlx::FromRow)]
struct FacilityRow {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn invalid_column(column: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Invalid {} value: {}", column, err),
    )
}

impl TryFrom<MemberRow> for Member {
    type Error = DomainError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        Ok(Member {
            id: MemberId::from_uuid(row.id),
            first_name: FirstName::new(row.first_name)
                .map_err(|e| invalid_column("first_name", e))?,
            sponsor_id: row.sponsor_id.map(MemberId::from_uuid),
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

impl TryFrom<FacilityRow> for Facility {
    type Error = DomainError;

    fn try_from(row: FacilityRow) -> Result<Self, Self::Error> {
        Ok(Facility {
            id: FacilityId::from_uuid(row.id),
            name: FacilityName::new(row.name).map_err(|e| invalid_column("name", e))?,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

impl TryFrom<BookingJoinRow> for BookingView {
    type Error = DomainError;

    fn try_from(row: BookingJoinRow) -> Result<Self, Self::Error> {
        // The joined side is present only when every NOT NULL column came back.
        let booked_by = match (
            row.member_id,
            row.member_first_name,
            row.member_created_at,
            row.member_updated_at,
        ) {
            (Some(id), Some(first_name), Some(created_at), Some(updated_at)) => {
                Some(Member::try_from(MemberRow {
                    id,
                    first_name,
                    sponsor_id: row.member_sponsor_id,
                    created_at,
                    updated_at,
                })?)
            }
            _ => None,
        };

        let facility = match (
            row.facility_row_id,
            row.facility_name,
            row.facility_created_at,
            row.facility_updated_at,
        ) {
            (Some(id), Some(name), Some(created_at), Some(updated_at)) => {
                Some(Facility::try_from(FacilityRow {
                    id,
                    name,
                    created_at,
                    updated_at,
                })?)
            }
            _ => None,
        };

        Ok(BookingView {
            booking: Booking {
                id: BookingId::from_i32(row.id),
                start_time: Timestamp::from_datetime(row.start_time),
                end_time: Timestamp::from_datetime(row.end_time),
                booked_by_id: row.booked_by_id.map(MemberId::from_uuid),
                facility_id: row.facility_id.map(FacilityId::from_uuid),
                created_at: Timestamp::from_datetime(row.created_at),
                updated_at: Timestamp::from_datetime(row.updated_at),
            },
            booked_by,
            facility,
        })
    }
}

#[async_trait]
impl ClubReader for PostgresClubReader {
    async fn list_bookings(&self) -> Result<Vec<BookingView>, DomainError> {
        let rows: Vec<BookingJoinRow> = sqlx::query_as(
            r#"
            SELECT b.id, b.start_time, b.end_time, b.booked_by_id, b.facility_id,
                   b.created_at, b.updated_at,
                   m.id AS member_id, m.first_name AS member_first_name,
                   m.sponsor_id AS member_sponsor_id,
                   m.created_at AS member_created_at, m.updated_at AS member_updated_at,
                   f.id AS facility_row_id, f.name AS facility_name,
                   f.created_at AS facility_created_at, f.updated_at AS facility_updated_at
            FROM bookings b
            LEFT JOIN members m ON m.id = b.booked_by_id
            LEFT JOIN facilities f ON f.id = b.facility_id
            ORDER BY b.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list bookings", e))?;

        rows.into_iter().map(BookingView::try_from).collect()
    }

    async fn list_facilities(&self) -> Result<Vec<Facility>, DomainError> {
        let rows: Vec<FacilityRow> = sqlx::query_as(
            r#"
            SELECT id, name, created_at, updated_at
            FROM facilities
            ORDER BY created_at, name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list facilities", e))?;

        rows.into_iter().map(Facility::try_from).collect()
    }

    async fn list_members(&self) -> Result<Vec<Member>, DomainError> {
        let rows: Vec<MemberRow> = sqlx::query_as(
            r#"
            SELECT id, first_name, sponsor_id, created_at, updated_at
            FROM members
            ORDER BY created_at, first_name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list members", e))?;

        rows.into_iter().map(Member::try_from).collect()
    }

    async fn find_member(&self, id: &MemberId) -> Result<Option<Member>, DomainError> {
        let row: Option<MemberRow> = sqlx::query_as(
            r#"
            SELECT id, first_name, sponsor_id, created_at, updated_at
            FROM members
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to get member", e))?;

        row.map(Member::try_from).transpose()
    }

    async fn find_sponsor(&self, id: &MemberId) -> Result<Option<Member>, DomainError> {
        let row: Option<MemberRow> = sqlx::query_as(
            r#"
            SELECT s.id, s.first_name, s.sponsor_id, s.created_at, s.updated_at
            FROM members m
            JOIN members s ON s.id = m.sponsor_id
            WHERE m.id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to get sponsor", e))?;

        row.map(Member::try_from).transpose()
    }
}
