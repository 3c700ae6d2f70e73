//! Member entity.
//!
//! A member may be sponsored by exactly one other member. The link is a
//! plain optional id; resolving it to the sponsoring `Member` is a lookup
//! through `ClubReader::find_sponsor`. Cycles are not prevented.

use crate::domain::foundation::{MemberId, Timestamp};
use serde::{Deserialize, Serialize};

use super::FirstName;

/// A club member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub first_name: FirstName,
    pub sponsor_id: Option<MemberId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Member {
    /// Creates an unsponsored member with a fresh id.
    pub fn new(first_name: FirstName) -> Self {
        let now = Timestamp::now();
        Self {
            id: MemberId::new(),
            first_name,
            sponsor_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_sponsored(&self) -> bool {
        self.sponsor_id.is_some()
    }

    /// Records `sponsor` as this member's sponsor and bumps `updated_at`.
    pub fn sponsored_by(&mut self, sponsor: MemberId) {
        self.sponsor_id = Some(sponsor);
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_member_is_unsponsored() {
        let member = Member::new(FirstName::new("larry").unwrap());
        assert!(!member.is_sponsored());
    }

    #[test]
    fn sponsored_by_sets_sponsor() {
        let lucy = Member::new(FirstName::new("lucy").unwrap());
        let mut moe = Member::new(FirstName::new("moe").unwrap());

        moe.sponsored_by(lucy.id);

        assert_eq!(moe.sponsor_id, Some(lucy.id));
        assert!(!moe.updated_at.is_before(&moe.created_at));
    }

    #[test]
    fn member_may_sponsor_itself() {
        let mut lucy = Member::new(FirstName::new("lucy").unwrap());
        let own_id = lucy.id;
        lucy.sponsored_by(own_id);
        assert_eq!(lucy.sponsor_id, Some(own_id));
    }
}
