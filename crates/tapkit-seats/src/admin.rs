//! Admin user-management service
//!
//! Executes the outcomes the deletion policy resolver decides, plus the
//! self-role-change guard on the role-update surface. The caller is assumed
//! to be authenticated already; this layer re-checks roles, not sessions.

use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use chrono::Utc;
use tapkit_directory::{DirectoryStore, User, UserRole};
use tapkit_events::{Event, EventBus};
use tapkit_storage::{delete_folder, user_folder_prefix, ObjectStore};

use crate::error::{SeatError, SeatResult};
use crate::policy::{resolve_deletion, DeletionOutcome, DeletionRequest};

/// Admin user-management service.
///
/// Wires the policy resolver to the directory store, the object-storage
/// cleanup, and the event bus. Storage cleanup and event publication are
/// best-effort: their failures are logged and never abort the primary
/// record mutation.
pub struct AdminService {
    directory: Arc<dyn DirectoryStore>,
    storage: Arc<dyn ObjectStore>,
    events: Arc<dyn EventBus>,
}

impl AdminService {
    /// Create a new admin service.
    pub fn new(
        directory: Arc<dyn DirectoryStore>,
        storage: Arc<dyn ObjectStore>,
        events: Arc<dyn EventBus>,
    ) -> Self {
        Self {
            directory,
            storage,
            events,
        }
    }

    /// Delete a user on behalf of an admin.
    ///
    /// Loads the records involved, consults
    /// [`resolve_deletion`](crate::policy::resolve_deletion), and executes
    /// the outcome. Policy rejections are returned verbatim; nothing is
    /// mutated on a rejection.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, actor_id: Uuid, target_id: Uuid) -> SeatResult<()> {
        let actor = self
            .directory
            .user(actor_id)
            .await?
            .ok_or(SeatError::UserNotFound)?;
        let target = self
            .directory
            .user(target_id)
            .await?
            .ok_or(SeatError::UserNotFound)?;

        let fellow_admins = self.fellow_admins(&target).await?;
        let administered: Vec<Uuid> = self
            .directory
            .organizations_administered_by(target_id)
            .await?
            .into_iter()
            .map(|org| org.id)
            .collect();

        let outcome = resolve_deletion(&DeletionRequest {
            actor: &actor,
            target: &target,
            fellow_admins: &fellow_admins,
            administered: &administered,
            now: Utc::now(),
        })?;

        match outcome {
            DeletionOutcome::HardDelete => {}
            DeletionOutcome::PurgeStorageThenDelete => {
                // Best-effort: an orphaned folder is acceptable, a blocked
                // deletion is not.
                let prefix = user_folder_prefix(target_id);
                if let Err(e) = delete_folder(self.storage.as_ref(), &prefix).await {
                    warn!(target_id = %target_id, "storage cleanup failed, continuing: {}", e);
                }
            }
            DeletionOutcome::ReassignThenDelete {
                successor,
                organizations,
            } => {
                for org_id in organizations {
                    let mut org = self
                        .directory
                        .organization(org_id)
                        .await?
                        .ok_or(SeatError::OrganizationNotFound)?;
                    org.reassign_admin(successor);
                    self.directory.put_organization(org).await?;

                    info!(org_id = %org_id, successor = %successor, "organization admin reassigned");
                    self.publish(Event::admin_reassigned(org_id, successor)).await;
                }
            }
        }

        self.directory.delete_user(target_id).await?;
        info!(target_id = %target_id, actor_id = %actor_id, "user deleted");
        self.publish(Event::user_deleted(actor_id, target_id)).await;

        Ok(())
    }

    /// Change a user's role on behalf of an admin.
    ///
    /// An admin may not change their own role via this surface, even when
    /// otherwise authorized.
    #[instrument(skip(self))]
    pub async fn change_role(
        &self,
        actor_id: Uuid,
        target_id: Uuid,
        role: UserRole,
    ) -> SeatResult<User> {
        if actor_id == target_id {
            return Err(SeatError::SelfRoleChange);
        }

        let actor = self
            .directory
            .user(actor_id)
            .await?
            .ok_or(SeatError::UserNotFound)?;
        if !actor.role.is_admin() {
            return Err(SeatError::Unauthorized);
        }

        let mut target = self
            .directory
            .user(target_id)
            .await?
            .ok_or(SeatError::UserNotFound)?;
        target.role = role;
        target.touch();
        self.directory.put_user(target.clone()).await?;

        info!(target_id = %target_id, role = role.as_str(), "user role changed");
        Ok(target)
    }

    /// Admin-role users occupying a profile in the target's company,
    /// excluding the target.
    async fn fellow_admins(&self, target: &User) -> SeatResult<Vec<Uuid>> {
        let Some(profile) = self.directory.profile_for_user(target.id).await? else {
            return Ok(Vec::new());
        };
        let Some(company_id) = profile.company_id else {
            return Ok(Vec::new());
        };

        let mut admins = Vec::new();
        for peer in self.directory.profiles_in_company(company_id).await? {
            if peer.user_id == target.id {
                continue;
            }
            if let Some(user) = self.directory.user(peer.user_id).await? {
                if user.role.is_admin() {
                    admins.push(user.id);
                }
            }
        }
        Ok(admins)
    }

    async fn publish(&self, event: Event) {
        if let Err(e) = self.events.publish(event).await {
            warn!("admin event publication failed: {}", e);
        }
    }
}
