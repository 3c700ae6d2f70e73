//! Axum router configuration for booking endpoints.

use axum::{routing::get, Router};

use super::handlers::{list_bookings, BookingAppState};

/// Create the booking API routes.
///
/// # Routes
/// - `GET /bookings` - All bookings with member and facility
pub fn booking_routes() -> Router<BookingAppState> {
    Router::new().route("/bookings", get(list_bookings))
}

/// Create the booking module router, mounted under `/api`.
///
/// # Example
///
/// ```ignore
/// let app = booking_router().with_state(BookingAppState::new(reader));
/// ```
pub fn booking_router() -> Router<BookingAppState> {
    Router::new().nest("/api", booking_routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryClubStore;
    use crate::application::handlers::club::{SeedClubCommand, SeedClubHandler};
    use crate::domain::club::{BookingView, Facility, Member};
    use crate::domain::foundation::{DomainError, ErrorCode, MemberId};
    use crate::ports::ClubReader;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    // ───────────────────────────────────────────────────────────────
    // Mock implementations
    // ───────────────────────────────────────────────────────────────

    struct FailingReader;

    #[async_trait]
    impl ClubReader for FailingReader {
        async fn list_bookings(&self) -> Result<Vec<BookingView>, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "Simulated read failure"))
        }

        async fn list_facilities(&self) -> Result<Vec<Facility>, DomainError> {
            Ok(vec![])
        }

        async fn list_members(&self) -> Result<Vec<Member>, DomainError> {
            Ok(vec![])
        }

        async fn find_member(&self, _id: &MemberId) -> Result<Option<Member>, DomainError> {
            Ok(None)
        }

        async fn find_sponsor(&self, _id: &MemberId) -> Result<Option<Member>, DomainError> {
            Ok(None)
        }
    }

    async fn seeded_state() -> BookingAppState {
        let store = InMemoryClubStore::new();
        SeedClubHandler::new(Arc::new(store.clone()), Arc::new(store.clone()))
            .handle(SeedClubCommand::default())
            .await
            .unwrap();
        BookingAppState::new(Arc::new(store))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    // ───────────────────────────────────────────────────────────────
    // Tests
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn get_bookings_returns_seeded_bookings() {
        let app = booking_router().with_state(seeded_state().await);

        let (status, json) = get(app, "/api/bookings").await;

        assert_eq!(status, StatusCode::OK);
        let bookings = json.as_array().unwrap();
        assert_eq!(bookings.len(), 3);
        assert_eq!(bookings[0]["bookedBy"]["first_name"], "lucy");
        assert_eq!(bookings[0]["facility"]["name"], "tennis");
        for unassigned in &bookings[1..] {
            assert!(unassigned["bookedBy"].is_null());
            assert!(unassigned["facility"].is_null());
        }
    }

    #[tokio::test]
    async fn get_bookings_reports_storage_failure() {
        let app = booking_router().with_state(BookingAppState::new(Arc::new(FailingReader)));

        let (status, json) = get(app, "/api/bookings").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error_code"], "INTERNAL_ERROR");
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let app = booking_router().with_state(seeded_state().await);

        let (status, _) = get(app, "/api/members").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn post_is_not_allowed() {
        let app = booking_router().with_state(seeded_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/bookings")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
