//! Deletion policy resolver
//!
//! Pure decision table for the admin "delete user" surface. The resolver
//! looks only at a snapshot of the records involved and returns what should
//! happen; executing the outcome is the admin service's job.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use tapkit_directory::{User, UserRole};

use crate::error::{SeatError, SeatResult};
use crate::lifecycle::within_grace_window;

/// Snapshot of everything the deletion decision depends on.
#[derive(Debug)]
pub struct DeletionRequest<'a> {
    /// The admin performing the request
    pub actor: &'a User,

    /// The user to be deleted
    pub target: &'a User,

    /// Admin-role users occupying a profile in the target's company,
    /// excluding the target themself
    pub fellow_admins: &'a [Uuid],

    /// Organizations whose `admin_id` references the target
    pub administered: &'a [Uuid],

    /// Evaluation time for the grace window
    pub now: DateTime<Utc>,
}

/// What a permitted deletion request should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// Remove the user row; the profile cascades
    HardDelete,

    /// Best-effort storage folder cleanup first, then remove the user row
    PurgeStorageThenDelete,

    /// Reassign `admin_id` on every listed organization to the successor,
    /// then remove the user row
    ReassignThenDelete {
        /// The admin who inherits the organizations
        successor: Uuid,
        /// Organizations currently administered by the target
        organizations: Vec<Uuid>,
    },
}

/// Decide the outcome of a delete-user request.
///
/// The decision table, by target role:
///
/// - **BusinessStaff**: a super admin deletes unconditionally. A business
///   admin deletes if the staff member never entered a grace period or is
///   still within the 30-day window; past the window the request is
///   rejected, never silently downgraded.
/// - **Individual**: deleted, with best-effort storage cleanup first.
/// - **BusinessAdmin**: rejected while they are the sole admin of their
///   company; otherwise their organizations are reassigned to a fellow
///   admin before deletion.
/// - **SuperAdmin**: another super admin may be deleted unconditionally.
///
/// Deleting one's own account is rejected for every role: that path belongs
/// to account settings, not the admin surface.
///
/// # Errors
///
/// `Unauthorized` for non-admin actors; `SelfDeletion`, `SoleAdmin`, and
/// `GracePeriodExpired` per the table above.
pub fn resolve_deletion(request: &DeletionRequest<'_>) -> SeatResult<DeletionOutcome> {
    if !request.actor.role.is_admin() {
        return Err(SeatError::Unauthorized);
    }
    if request.actor.id == request.target.id {
        return Err(SeatError::SelfDeletion);
    }

    match request.target.role {
        UserRole::BusinessStaff => {
            if request.actor.role.is_super_admin() {
                return Ok(DeletionOutcome::HardDelete);
            }
            match request.target.separated_at() {
                // Never separated: treated as immediately deletable.
                None => Ok(DeletionOutcome::HardDelete),
                Some(since) if within_grace_window(request.now, since) => {
                    Ok(DeletionOutcome::HardDelete)
                }
                Some(_) => Err(SeatError::GracePeriodExpired),
            }
        }

        UserRole::Individual => Ok(DeletionOutcome::PurgeStorageThenDelete),

        UserRole::BusinessAdmin => match request.fellow_admins.first() {
            None => Err(SeatError::SoleAdmin),
            Some(successor) => Ok(DeletionOutcome::ReassignThenDelete {
                successor: *successor,
                organizations: request.administered.to_vec(),
            }),
        },

        UserRole::SuperAdmin => Ok(DeletionOutcome::HardDelete),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use tapkit_directory::AccountStanding;

    fn user(role: UserRole) -> User {
        User::new("u@acme.example", "U", role)
    }

    fn separated(role: UserRole, days_ago: i64) -> User {
        let mut u = user(role);
        u.standing = AccountStanding::GracePeriod {
            since: Utc::now() - Duration::days(days_ago),
        };
        u
    }

    fn request<'a>(
        actor: &'a User,
        target: &'a User,
        fellow_admins: &'a [Uuid],
        administered: &'a [Uuid],
    ) -> DeletionRequest<'a> {
        DeletionRequest {
            actor,
            target,
            fellow_admins,
            administered,
            now: Utc::now(),
        }
    }

    #[test]
    fn test_non_admin_actor_is_rejected_first() {
        let actor = user(UserRole::BusinessStaff);
        let target = user(UserRole::Individual);

        let err = resolve_deletion(&request(&actor, &target, &[], &[])).unwrap_err();
        assert!(matches!(err, SeatError::Unauthorized));
    }

    #[test]
    fn test_super_admin_deletes_staff_unconditionally() {
        let actor = user(UserRole::SuperAdmin);
        let target = separated(UserRole::BusinessStaff, 400);

        let outcome = resolve_deletion(&request(&actor, &target, &[], &[])).unwrap();
        assert_eq!(outcome, DeletionOutcome::HardDelete);
    }

    #[test]
    fn test_business_admin_deletes_unseparated_staff() {
        let actor = user(UserRole::BusinessAdmin);
        let target = user(UserRole::BusinessStaff);

        let outcome = resolve_deletion(&request(&actor, &target, &[], &[])).unwrap();
        assert_eq!(outcome, DeletionOutcome::HardDelete);
    }

    #[test]
    fn test_business_admin_deletes_staff_within_window() {
        let actor = user(UserRole::BusinessAdmin);
        let target = separated(UserRole::BusinessStaff, 10);

        let outcome = resolve_deletion(&request(&actor, &target, &[], &[])).unwrap();
        assert_eq!(outcome, DeletionOutcome::HardDelete);
    }

    #[test]
    fn test_business_admin_rejected_past_window() {
        let actor = user(UserRole::BusinessAdmin);
        let target = separated(UserRole::BusinessStaff, 45);

        let err = resolve_deletion(&request(&actor, &target, &[], &[])).unwrap_err();
        assert!(matches!(err, SeatError::GracePeriodExpired));
    }

    #[test]
    fn test_individual_gets_storage_cleanup_first() {
        let actor = user(UserRole::SuperAdmin);
        let target = user(UserRole::Individual);

        let outcome = resolve_deletion(&request(&actor, &target, &[], &[])).unwrap();
        assert_eq!(outcome, DeletionOutcome::PurgeStorageThenDelete);
    }

    #[test]
    fn test_sole_admin_is_protected() {
        let actor = user(UserRole::SuperAdmin);
        let target = user(UserRole::BusinessAdmin);

        let err = resolve_deletion(&request(&actor, &target, &[], &[])).unwrap_err();
        assert!(matches!(err, SeatError::SoleAdmin));
    }

    #[test]
    fn test_non_sole_admin_reassigns_every_organization() {
        let actor = user(UserRole::SuperAdmin);
        let target = user(UserRole::BusinessAdmin);
        let successor = Uuid::now_v7();
        let orgs = [Uuid::now_v7(), Uuid::now_v7()];

        let outcome = resolve_deletion(&request(&actor, &target, &[successor], &orgs)).unwrap();
        assert_eq!(
            outcome,
            DeletionOutcome::ReassignThenDelete {
                successor,
                organizations: orgs.to_vec(),
            }
        );
    }

    #[test]
    fn test_self_deletion_is_redirected_to_settings() {
        let actor = user(UserRole::SuperAdmin);

        let err = resolve_deletion(&request(&actor, &actor, &[], &[])).unwrap_err();
        assert!(matches!(err, SeatError::SelfDeletion));
    }

    #[test]
    fn test_super_admin_deletes_other_super_admin() {
        let actor = user(UserRole::SuperAdmin);
        let target = user(UserRole::SuperAdmin);

        let outcome = resolve_deletion(&request(&actor, &target, &[], &[])).unwrap();
        assert_eq!(outcome, DeletionOutcome::HardDelete);
    }
}
