//! GetSponsorHandler - Query handler resolving a member's sponsor.

use std::sync::Arc;

use crate::domain::club::Member;
use crate::domain::foundation::{DomainError, ErrorCode, MemberId};
use crate::ports::ClubReader;

/// Query for the sponsor of a member.
#[derive(Debug, Clone)]
pub struct GetSponsorQuery {
    pub member_id: MemberId,
}

/// `None` when the member has no sponsor.
pub type GetSponsorResult = Option<Member>;

/// Handler for sponsor lookups.
///
/// Unlike `ClubReader::find_sponsor`, an unknown member is an error here.
pub struct GetSponsorHandler {
    reader: Arc<dyn ClubReader>,
}

impl GetSponsorHandler {
    pub fn new(reader: Arc<dyn ClubReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetSponsorQuery) -> Result<GetSponsorResult, DomainError> {
        let member = self
            .reader
            .find_member(&query.member_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::NotFound,
                    format!("Member {} not found", query.member_id),
                )
            })?;

        if !member.is_sponsored() {
            return Ok(None);
        }

        self.reader.find_sponsor(&member.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryClubStore;
    use crate::application::handlers::club::{SeedClubCommand, SeedClubHandler, SeedClubResult};

    async fn seeded() -> (InMemoryClubStore, SeedClubResult) {
        let store = InMemoryClubStore::new();
        let result = SeedClubHandler::new(Arc::new(store.clone()), Arc::new(store.clone()))
            .handle(SeedClubCommand::default())
            .await
            .unwrap();
        (store, result)
    }

    #[tokio::test]
    async fn resolves_sponsor_of_sponsored_member() {
        let (store, seed) = seeded().await;
        let handler = GetSponsorHandler::new(Arc::new(store));

        let sponsor = handler
            .handle(GetSponsorQuery {
                member_id: seed.members[1].id,
            })
            .await
            .unwrap();

        assert_eq!(sponsor.map(|m| m.first_name.to_string()), Some("lucy".to_string()));
    }

    #[tokio::test]
    async fn unsponsored_member_has_none() {
        let (store, seed) = seeded().await;
        let handler = GetSponsorHandler::new(Arc::new(store));

        let sponsor = handler
            .handle(GetSponsorQuery {
                member_id: seed.members[2].id,
            })
            .await
            .unwrap();

        assert!(sponsor.is_none());
    }

    #[tokio::test]
    async fn unknown_member_is_not_found() {
        let handler = GetSponsorHandler::new(Arc::new(InMemoryClubStore::new()));

        let err = handler
            .handle(GetSponsorQuery {
                member_id: MemberId::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
