//! User domain model
//!
//! This module provides the core User entity: the identity record carrying
//! the platform role and the account standing that drives the staff
//! separation lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::roles::UserRole;
use crate::standing::AccountStanding;

/// A user identity record.
///
/// Users hold exactly one role and one standing. Staff users are linked to
/// their organization via their [`Profile`](crate::Profile), not directly.
///
/// # Examples
///
/// ```
/// use tapkit_directory::{User, UserRole};
///
/// let user = User::new("kim@acme.example", "Kim", UserRole::BusinessStaff);
/// assert_eq!(user.role, UserRole::BusinessStaff);
/// assert!(user.standing.is_active());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Login email (unique across platform)
    pub email: String,

    /// Human-readable display name
    pub display_name: String,

    /// Platform role
    pub role: UserRole,

    /// Account lifecycle standing
    pub standing: AccountStanding,

    /// When the user was created
    pub created_at: DateTime<Utc>,

    /// When the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new active user.
    ///
    /// The user is created with:
    /// - A newly generated UUID v7 ID
    /// - Active standing
    /// - Current timestamp for created_at and updated_at
    ///
    /// # Arguments
    ///
    /// * `email` - Login email
    /// * `display_name` - Display name
    /// * `role` - Platform role
    pub fn new(email: impl Into<String>, display_name: impl Into<String>, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            email: email.into(),
            display_name: display_name.into(),
            role,
            standing: AccountStanding::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// The separation timestamp, if the user is a grace-period staff member.
    pub fn separated_at(&self) -> Option<DateTime<Utc>> {
        self.standing.separated_at()
    }

    /// Check if this user carries admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Mark the user as updated now.
    ///
    /// Callers mutate fields directly and then touch the record before
    /// persisting it.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("kim@acme.example", "Kim", UserRole::BusinessStaff);

        assert_eq!(user.email, "kim@acme.example");
        assert_eq!(user.display_name, "Kim");
        assert_eq!(user.role, UserRole::BusinessStaff);
        assert!(user.standing.is_active());
        assert_eq!(user.separated_at(), None);
    }

    #[test]
    fn test_user_is_admin() {
        let staff = User::new("a@x.example", "A", UserRole::BusinessStaff);
        let admin = User::new("b@x.example", "B", UserRole::BusinessAdmin);

        assert!(!staff.is_admin());
        assert!(admin.is_admin());
    }

    #[test]
    fn test_touch_advances_updated_at() {
        let mut user = User::new("a@x.example", "A", UserRole::Individual);
        let before = user.updated_at;
        user.touch();
        assert!(user.updated_at >= before);
    }
}
