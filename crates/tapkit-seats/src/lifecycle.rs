//! Staff separation lifecycle
//!
//! Separated staff move from active standing into a 30-day grace period.
//! Within the window a hard delete is still permitted; once the window has
//! passed, the explicit finalize path downgrades the account to a permanent
//! inactive individual whose seat stays occupied.
//!
//! The ad-hoc delete path never downgrades as a fallback: a delete requested
//! past the window is rejected outright. Only `finalize_separation` performs
//! the downgrade. That asymmetry is deliberate and load-bearing for the
//! admin endpoint semantics.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use tapkit_directory::{AccountStanding, DirectoryStore, User, UserRole};
use tapkit_events::{Event, EventBus};

use crate::error::{SeatError, SeatResult};

/// Length of the separation grace window, in days.
pub const GRACE_PERIOD_DAYS: u32 = 30;

const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Whole days elapsed since a separation.
///
/// Computed as `ceil(|now - since| / 1 day)`: any partial day counts as a
/// full day, so separating at 23:59 and checking one minute later already
/// counts as one elapsed day. This rounding is carried over from the
/// historical policy; the grace window can therefore end slightly before 30
/// full wall-clock days have passed.
pub fn elapsed_grace_days(now: DateTime<Utc>, since: DateTime<Utc>) -> u32 {
    let millis = (now - since).num_milliseconds().unsigned_abs();
    millis
        .div_ceil(MILLIS_PER_DAY)
        .try_into()
        .unwrap_or(u32::MAX)
}

/// Check whether a hard delete is still permitted for a separation time.
///
/// The boundary is inclusive: exactly 30 elapsed days still permits
/// deletion.
pub fn within_grace_window(now: DateTime<Utc>, since: DateTime<Utc>) -> bool {
    elapsed_grace_days(now, since) <= GRACE_PERIOD_DAYS
}

/// Result of resolving a grace period.
#[derive(Debug, Clone)]
pub enum FinalizeOutcome {
    /// Within the window: the user row was hard-deleted, the seat released
    Deleted,

    /// Past the window: the account was downgraded to a permanent inactive
    /// individual; the seat stays occupied
    Retained(User),

    /// The account was already finalized; nothing changed
    AlreadyFinalized,
}

/// Staff separation service.
///
/// Drives the Active → GracePeriod → (deleted | inactive individual)
/// transitions against the directory store and announces outcomes on the
/// event bus. Event publication is best-effort and never fails the primary
/// mutation.
pub struct StaffLifecycle {
    directory: Arc<dyn DirectoryStore>,
    events: Arc<dyn EventBus>,
}

impl StaffLifecycle {
    /// Create a new lifecycle service.
    pub fn new(directory: Arc<dyn DirectoryStore>, events: Arc<dyn EventBus>) -> Self {
        Self { directory, events }
    }

    /// Separate a staff member: Active → GracePeriod.
    ///
    /// The actor must hold an admin role. The staff user's standing becomes
    /// `GracePeriod { since: now }`; seat occupancy does not change.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if the actor lacks an admin role
    /// - `UserNotFound` if actor or staff user is absent
    pub async fn remove_staff(&self, actor_id: Uuid, staff_id: Uuid) -> SeatResult<User> {
        let actor = self
            .directory
            .user(actor_id)
            .await?
            .ok_or(SeatError::UserNotFound)?;
        if !actor.role.is_admin() {
            return Err(SeatError::Unauthorized);
        }

        let mut staff = self
            .directory
            .user(staff_id)
            .await?
            .ok_or(SeatError::UserNotFound)?;

        staff.standing = AccountStanding::GracePeriod { since: Utc::now() };
        staff.touch();
        self.directory.put_user(staff.clone()).await?;

        info!(staff_id = %staff_id, actor_id = %actor_id, "staff member separated");
        self.publish(Event::staff_separated(actor_id, staff_id)).await;

        Ok(staff)
    }

    /// Resolve a grace period.
    ///
    /// Within the window the user row is hard-deleted (profile cascades,
    /// seat released). Past the window the account is downgraded: role
    /// becomes Individual, standing becomes Inactive, and the profile's
    /// `company_id` is deliberately left in place so the seat stays
    /// occupied.
    ///
    /// Calling finalize again on an already-Inactive account is a no-op
    /// success; the occupied-seat count does not change.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the user is absent
    /// - `NothingToFinalize` if the user was never separated
    pub async fn finalize_separation(&self, staff_id: Uuid) -> SeatResult<FinalizeOutcome> {
        let mut staff = self
            .directory
            .user(staff_id)
            .await?
            .ok_or(SeatError::UserNotFound)?;

        match staff.standing {
            AccountStanding::GracePeriod { since } => {
                if within_grace_window(Utc::now(), since) {
                    self.directory.delete_user(staff_id).await?;
                    info!(staff_id = %staff_id, "grace period resolved: user deleted");
                    self.publish(Event::staff_finalized(staff_id, true)).await;
                    Ok(FinalizeOutcome::Deleted)
                } else {
                    staff.role = UserRole::Individual;
                    staff.standing = AccountStanding::Inactive;
                    staff.touch();
                    self.directory.put_user(staff.clone()).await?;
                    info!(staff_id = %staff_id, "grace period resolved: user retained as individual");
                    self.publish(Event::staff_finalized(staff_id, false)).await;
                    Ok(FinalizeOutcome::Retained(staff))
                }
            }
            AccountStanding::Inactive => Ok(FinalizeOutcome::AlreadyFinalized),
            AccountStanding::Active => Err(SeatError::NothingToFinalize),
        }
    }

    async fn publish(&self, event: Event) {
        if let Err(e) = self.events.publish(event).await {
            warn!("lifecycle event publication failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use tapkit_directory::{MemoryDirectory, Profile};
    use tapkit_events::MemoryEventBus;

    fn service(store: Arc<MemoryDirectory>) -> StaffLifecycle {
        StaffLifecycle::new(store, Arc::new(MemoryEventBus::new()))
    }

    async fn seeded(store: &MemoryDirectory, role: UserRole) -> Uuid {
        let user = User::new("u@acme.example", "U", role);
        let id = user.id;
        store.seed(user, Profile::new(id)).await.unwrap();
        id
    }

    #[test]
    fn test_elapsed_days_rounds_partial_days_up() {
        let since = Utc::now();

        assert_eq!(elapsed_grace_days(since, since), 0);
        assert_eq!(elapsed_grace_days(since + Duration::minutes(1), since), 1);
        assert_eq!(elapsed_grace_days(since + Duration::hours(25), since), 2);
        // Direction does not matter; the difference is absolute.
        assert_eq!(elapsed_grace_days(since - Duration::minutes(1), since), 1);
    }

    #[test]
    fn test_grace_window_boundary_is_inclusive() {
        let now = Utc::now();

        assert!(within_grace_window(now, now - Duration::days(10)));
        assert!(within_grace_window(now, now - Duration::days(30)));
        // One partial day past 30 rounds up to 31.
        assert!(!within_grace_window(now, now - Duration::days(30) - Duration::minutes(1)));
        assert!(!within_grace_window(now, now - Duration::days(45)));
    }

    #[tokio::test]
    async fn test_remove_staff_requires_admin_actor() {
        let store = Arc::new(MemoryDirectory::new());
        let svc = service(store.clone());
        let peer = seeded(&store, UserRole::BusinessStaff).await;
        let staff = seeded(&store, UserRole::BusinessStaff).await;

        let err = svc.remove_staff(peer, staff).await.unwrap_err();
        assert!(matches!(err, SeatError::Unauthorized));

        // Staff record untouched.
        let reloaded = store.user(staff).await.unwrap().unwrap();
        assert!(reloaded.standing.is_active());
    }

    #[tokio::test]
    async fn test_remove_staff_enters_grace_period() {
        let store = Arc::new(MemoryDirectory::new());
        let svc = service(store.clone());
        let admin = seeded(&store, UserRole::BusinessAdmin).await;
        let staff = seeded(&store, UserRole::BusinessStaff).await;

        let separated = svc.remove_staff(admin, staff).await.unwrap();
        assert!(separated.standing.is_grace_period());
        assert!(separated.separated_at().is_some());
    }

    #[tokio::test]
    async fn test_finalize_within_window_deletes() {
        let store = Arc::new(MemoryDirectory::new());
        let svc = service(store.clone());
        let staff = seeded(&store, UserRole::BusinessStaff).await;

        let mut user = store.user(staff).await.unwrap().unwrap();
        user.standing = AccountStanding::GracePeriod {
            since: Utc::now() - Duration::days(10),
        };
        store.put_user(user).await.unwrap();

        let outcome = svc.finalize_separation(staff).await.unwrap();
        assert!(matches!(outcome, FinalizeOutcome::Deleted));
        assert!(store.user(staff).await.unwrap().is_none());
        assert!(store.profile_for_user(staff).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_finalize_past_window_downgrades_and_keeps_seat_link() {
        let store = Arc::new(MemoryDirectory::new());
        let svc = service(store.clone());
        let org_id = Uuid::now_v7();

        let user = User::new("kim@acme.example", "Kim", UserRole::BusinessStaff);
        let staff = user.id;
        store
            .seed(user, Profile::new(staff).with_company(org_id))
            .await
            .unwrap();

        let mut user = store.user(staff).await.unwrap().unwrap();
        user.standing = AccountStanding::GracePeriod {
            since: Utc::now() - Duration::days(45),
        };
        store.put_user(user).await.unwrap();

        let outcome = svc.finalize_separation(staff).await.unwrap();
        let retained = match outcome {
            FinalizeOutcome::Retained(u) => u,
            other => panic!("expected Retained, got {other:?}"),
        };
        assert_eq!(retained.role, UserRole::Individual);
        assert!(retained.standing.is_inactive());
        assert_eq!(retained.separated_at(), None);

        // Seat link deliberately survives the downgrade.
        let profile = store.profile_for_user(staff).await.unwrap().unwrap();
        assert_eq!(profile.company_id, Some(org_id));
    }

    #[tokio::test]
    async fn test_finalize_is_idempotent_in_effect() {
        let store = Arc::new(MemoryDirectory::new());
        let svc = service(store.clone());
        let staff = seeded(&store, UserRole::BusinessStaff).await;

        let mut user = store.user(staff).await.unwrap().unwrap();
        user.standing = AccountStanding::GracePeriod {
            since: Utc::now() - Duration::days(45),
        };
        store.put_user(user).await.unwrap();

        svc.finalize_separation(staff).await.unwrap();
        let outcome = svc.finalize_separation(staff).await.unwrap();
        assert!(matches!(outcome, FinalizeOutcome::AlreadyFinalized));

        let reloaded = store.user(staff).await.unwrap().unwrap();
        assert!(reloaded.standing.is_inactive());
    }

    #[tokio::test]
    async fn test_finalize_active_user_is_rejected() {
        let store = Arc::new(MemoryDirectory::new());
        let svc = service(store.clone());
        let staff = seeded(&store, UserRole::BusinessStaff).await;

        let err = svc.finalize_separation(staff).await.unwrap_err();
        assert!(matches!(err, SeatError::NothingToFinalize));
    }
}
