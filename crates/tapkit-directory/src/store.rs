//! Directory store seam
//!
//! This module provides the `DirectoryStore` abstraction over the relational
//! datastore, plus an in-memory implementation for single-process use and
//! testing. The seat and lifecycle logic only ever talks to this trait.

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::organization::Organization;
use crate::profile::Profile;
use crate::user::User;

/// Directory store error types.
///
/// Store failures are the "unexpected datastore error" class: callers convert
/// them to a generic failure at the boundary rather than leaking detail.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Underlying datastore failed
    #[error("Datastore error: {0}")]
    Store(String),

    /// A write referenced a record that does not exist
    #[error("Referenced record not found: {0}")]
    MissingReference(Uuid),
}

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Async store of users, profiles, and organizations.
///
/// Implementations are plain CRUD: no cross-record transactions and no
/// locking beyond what the datastore provides for individual statements.
/// Concurrent admin actions on the same record may race to a not-found on
/// the second request, which is acceptable at human-paced admin volume.
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    /// Load a user by ID.
    async fn user(&self, id: Uuid) -> DirectoryResult<Option<User>>;

    /// Insert or replace a user.
    async fn put_user(&self, user: User) -> DirectoryResult<()>;

    /// Hard-delete a user. The linked profile is removed by cascade.
    ///
    /// # Returns
    ///
    /// `true` if a user row was removed
    async fn delete_user(&self, id: Uuid) -> DirectoryResult<bool>;

    /// Load the profile linked to a user.
    async fn profile_for_user(&self, user_id: Uuid) -> DirectoryResult<Option<Profile>>;

    /// Insert or replace a profile.
    async fn put_profile(&self, profile: Profile) -> DirectoryResult<()>;

    /// Load an organization by ID.
    async fn organization(&self, id: Uuid) -> DirectoryResult<Option<Organization>>;

    /// Insert or replace an organization.
    async fn put_organization(&self, org: Organization) -> DirectoryResult<()>;

    /// All profiles whose `company_id` references the organization.
    async fn profiles_in_company(&self, org_id: Uuid) -> DirectoryResult<Vec<Profile>>;

    /// All organizations whose `admin_id` references the user.
    async fn organizations_administered_by(&self, user_id: Uuid)
        -> DirectoryResult<Vec<Organization>>;
}

/// In-memory directory store.
///
/// Suitable for single-process applications and testing. Tables are guarded
/// by `tokio::sync::RwLock`; profiles are keyed by their owning user ID since
/// the relationship is one-to-one.
#[derive(Default)]
pub struct MemoryDirectory {
    users: RwLock<HashMap<Uuid, User>>,
    profiles: RwLock<HashMap<Uuid, Profile>>,
    organizations: RwLock<HashMap<Uuid, Organization>>,
}

impl std::fmt::Debug for MemoryDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryDirectory").finish()
    }
}

impl MemoryDirectory {
    /// Create an empty in-memory directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user together with their profile.
    ///
    /// Convenience for tests and bootstrap code.
    pub async fn seed(&self, user: User, profile: Profile) -> DirectoryResult<()> {
        self.put_user(user).await?;
        self.put_profile(profile).await
    }
}

#[async_trait]
impl DirectoryStore for MemoryDirectory {
    async fn user(&self, id: Uuid) -> DirectoryResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn put_user(&self, user: User) -> DirectoryResult<()> {
        self.users.write().await.insert(user.id, user);
        Ok(())
    }

    async fn delete_user(&self, id: Uuid) -> DirectoryResult<bool> {
        let removed = self.users.write().await.remove(&id).is_some();
        if removed {
            // Cascade: the one-to-one profile goes with the user row.
            self.profiles.write().await.remove(&id);
        }
        Ok(removed)
    }

    async fn profile_for_user(&self, user_id: Uuid) -> DirectoryResult<Option<Profile>> {
        Ok(self.profiles.read().await.get(&user_id).cloned())
    }

    async fn put_profile(&self, profile: Profile) -> DirectoryResult<()> {
        if !self.users.read().await.contains_key(&profile.user_id) {
            return Err(DirectoryError::MissingReference(profile.user_id));
        }
        self.profiles.write().await.insert(profile.user_id, profile);
        Ok(())
    }

    async fn organization(&self, id: Uuid) -> DirectoryResult<Option<Organization>> {
        Ok(self.organizations.read().await.get(&id).cloned())
    }

    async fn put_organization(&self, org: Organization) -> DirectoryResult<()> {
        self.organizations.write().await.insert(org.id, org);
        Ok(())
    }

    async fn profiles_in_company(&self, org_id: Uuid) -> DirectoryResult<Vec<Profile>> {
        Ok(self
            .profiles
            .read()
            .await
            .values()
            .filter(|p| p.occupies_seat_in(org_id))
            .cloned()
            .collect())
    }

    async fn organizations_administered_by(
        &self,
        user_id: Uuid,
    ) -> DirectoryResult<Vec<Organization>> {
        Ok(self
            .organizations
            .read()
            .await
            .values()
            .filter(|o| o.admin_id == user_id)
            .cloned()
            .collect())
    }
}
