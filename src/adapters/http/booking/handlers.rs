//! HTTP handlers for booking endpoints.
//!
//! These handlers connect Axum routes to the application layer query handlers.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::club::{ListBookingsHandler, ListBookingsQuery};
use crate::domain::foundation::DomainError;
use crate::ports::ClubReader;

use super::dto::{BookingResponse, ErrorResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for booking routes.
///
/// Cloned for each request; holds the reader behind an `Arc`.
#[derive(Clone)]
pub struct BookingAppState {
    pub club_reader: Arc<dyn ClubReader>,
}

impl BookingAppState {
    pub fn new(club_reader: Arc<dyn ClubReader>) -> Self {
        Self { club_reader }
    }

    pub fn list_bookings_handler(&self) -> ListBookingsHandler {
        ListBookingsHandler::new(self.club_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/bookings - All bookings with `bookedBy` and `facility` nested
pub async fn list_bookings(
    State(state): State<BookingAppState>,
) -> Result<impl IntoResponse, BookingApiError> {
    let handler = state.list_bookings_handler();

    let result = handler.handle(ListBookingsQuery).await?;

    let response: Vec<BookingResponse> = result.into_iter().map(BookingResponse::from).collect();
    Ok(Json(response))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type: every failure is answered as an internal error.
#[derive(Debug)]
pub struct BookingApiError(DomainError);

impl From<DomainError> for BookingApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for BookingApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(code = %self.0.code, "Request failed: {}", self.0.message);
        let body = ErrorResponse::new("INTERNAL_ERROR", self.0.message);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
