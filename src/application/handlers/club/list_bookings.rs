//! ListBookingsHandler - Query handler for bookings with member and
//! facility resolved.

use std::sync::Arc;

use crate::domain::club::BookingView;
use crate::domain::foundation::DomainError;
use crate::ports::ClubReader;

/// Query for every booking. There is no filtering or paging.
#[derive(Debug, Clone, Default)]
pub struct ListBookingsQuery;

/// Result of a successful bookings query.
pub type ListBookingsResult = Vec<BookingView>;

/// Handler for listing bookings.
pub struct ListBookingsHandler {
    reader: Arc<dyn ClubReader>,
}

impl ListBookingsHandler {
    pub fn new(reader: Arc<dyn ClubReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, _query: ListBookingsQuery) -> Result<ListBookingsResult, DomainError> {
        self.reader.list_bookings().await
    }
}
