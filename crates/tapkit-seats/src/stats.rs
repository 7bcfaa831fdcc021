//! Seat counter
//!
//! Seat usage is a pure computed query over the profile/user join. There is
//! no cached counter field to drift out of sync with the linked records, and
//! no caching layer at this scale.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tapkit_directory::DirectoryStore;

use crate::error::SeatResult;

/// Seat usage for an organization.
///
/// Every linked profile counts as an occupied seat, whatever the standing of
/// its user: active staff, grace-period staff, and finalized individuals all
/// hold their seat. Seats are never freed automatically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatStats {
    /// Total seat allowance
    pub max_seats: u32,

    /// Seats consumed by linked profiles
    pub occupied_seats: u32,

    /// Seats still available
    pub available_seats: u32,
}

/// Compute seat usage for an organization.
///
/// Read-only. An occupied seat is a profile whose `company_id` references
/// the organization and whose linked user still exists.
///
/// # Returns
///
/// `Ok(None)` when the organization does not exist; callers must check for
/// absence rather than expect an error.
pub async fn organization_stats(
    store: &dyn DirectoryStore,
    org_id: Uuid,
) -> SeatResult<Option<SeatStats>> {
    let Some(org) = store.organization(org_id).await? else {
        return Ok(None);
    };

    let mut occupied_seats: u32 = 0;
    for profile in store.profiles_in_company(org_id).await? {
        if store.user(profile.user_id).await?.is_some() {
            occupied_seats += 1;
        }
    }

    Ok(Some(SeatStats {
        max_seats: org.max_seats,
        occupied_seats,
        available_seats: org.max_seats.saturating_sub(occupied_seats),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tapkit_directory::{
        AccountStanding, MemoryDirectory, Organization, Profile, User, UserRole,
    };

    async fn seeded_member(
        store: &MemoryDirectory,
        org_id: Uuid,
        role: UserRole,
        standing: AccountStanding,
    ) -> Uuid {
        let mut user = User::new("m@acme.example", "M", role);
        user.standing = standing;
        let id = user.id;
        store
            .seed(user, Profile::new(id).with_company(org_id))
            .await
            .unwrap();
        id
    }

    #[tokio::test]
    async fn test_stats_counts_every_standing() {
        let store = MemoryDirectory::new();
        let org = Organization::new("Acme", 5, Uuid::now_v7());
        let org_id = org.id;
        store.put_organization(org).await.unwrap();

        seeded_member(&store, org_id, UserRole::BusinessStaff, AccountStanding::Active).await;
        seeded_member(
            &store,
            org_id,
            UserRole::BusinessStaff,
            AccountStanding::GracePeriod { since: Utc::now() },
        )
        .await;
        // A finalized individual keeps the seat occupied.
        seeded_member(&store, org_id, UserRole::Individual, AccountStanding::Inactive).await;

        let stats = organization_stats(&store, org_id).await.unwrap().unwrap();
        assert_eq!(
            stats,
            SeatStats {
                max_seats: 5,
                occupied_seats: 3,
                available_seats: 2,
            }
        );
    }

    #[tokio::test]
    async fn test_missing_organization_yields_none() {
        let store = MemoryDirectory::new();
        let stats = organization_stats(&store, Uuid::now_v7()).await.unwrap();
        assert!(stats.is_none());
    }

    #[tokio::test]
    async fn test_overcommitted_org_saturates_available() {
        let store = MemoryDirectory::new();
        let org = Organization::new("Tiny", 1, Uuid::now_v7());
        let org_id = org.id;
        store.put_organization(org).await.unwrap();

        seeded_member(&store, org_id, UserRole::BusinessStaff, AccountStanding::Active).await;
        seeded_member(&store, org_id, UserRole::Individual, AccountStanding::Inactive).await;

        let stats = organization_stats(&store, org_id).await.unwrap().unwrap();
        assert_eq!(stats.occupied_seats, 2);
        assert_eq!(stats.available_seats, 0);
    }
}
