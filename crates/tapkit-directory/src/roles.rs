//! Platform user roles
//!
//! This module defines the role a user holds on the platform and the
//! privilege checks the seat and deletion logic relies on.

use serde::{Deserialize, Serialize};

/// Role of a user on the platform.
///
/// Roles are ordered by privilege:
/// Individual < BusinessStaff < BusinessAdmin < SuperAdmin
///
/// # Permission Model
///
/// - **Individual**: Owns a personal card, no organization privileges
/// - **BusinessStaff**: Occupies a seat in an organization
/// - **BusinessAdmin**: Manages an organization's staff and seats
/// - **SuperAdmin**: Platform operator, unrestricted admin surface
///
/// # Examples
///
/// ```
/// use tapkit_directory::UserRole;
///
/// assert!(UserRole::BusinessAdmin.is_admin());
/// assert!(!UserRole::BusinessStaff.is_admin());
/// assert!(UserRole::SuperAdmin.is_super_admin());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Personal card owner, no organization privileges
    Individual = 0,

    /// Staff member occupying an organization seat
    BusinessStaff = 1,

    /// Organization administrator
    BusinessAdmin = 2,

    /// Platform operator
    SuperAdmin = 3,
}

impl UserRole {
    /// Check if this role carries admin privileges.
    ///
    /// Admin privileges allow managing staff, seats, and user deletion.
    ///
    /// # Returns
    ///
    /// `true` for BusinessAdmin and SuperAdmin roles
    pub fn is_admin(&self) -> bool {
        *self >= UserRole::BusinessAdmin
    }

    /// Check if this role is the platform operator role.
    pub fn is_super_admin(&self) -> bool {
        matches!(self, UserRole::SuperAdmin)
    }

    /// Check if this role occupies (or can occupy) an organization seat.
    ///
    /// # Returns
    ///
    /// `true` for BusinessStaff and BusinessAdmin roles
    pub fn is_business(&self) -> bool {
        matches!(self, UserRole::BusinessStaff | UserRole::BusinessAdmin)
    }

    /// Parse role from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(UserRole)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use tapkit_directory::UserRole;
    ///
    /// assert_eq!(UserRole::parse("business_admin"), Some(UserRole::BusinessAdmin));
    /// assert_eq!(UserRole::parse("INDIVIDUAL"), Some(UserRole::Individual));
    /// assert_eq!(UserRole::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "individual" => Some(Self::Individual),
            "business_staff" => Some(Self::BusinessStaff),
            "business_admin" => Some(Self::BusinessAdmin),
            "super_admin" => Some(Self::SuperAdmin),
            _ => None,
        }
    }

    /// Get string representation of the role.
    ///
    /// # Returns
    ///
    /// Lowercase snake_case string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::BusinessStaff => "business_staff",
            Self::BusinessAdmin => "business_admin",
            Self::SuperAdmin => "super_admin",
        }
    }

    /// Get a human-readable display name for the role.
    ///
    /// # Examples
    ///
    /// ```
    /// use tapkit_directory::UserRole;
    ///
    /// assert_eq!(UserRole::BusinessAdmin.display_name(), "Business Admin");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::BusinessStaff => "Business Staff",
            Self::BusinessAdmin => "Business Admin",
            Self::SuperAdmin => "Super Admin",
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Individual
    }
}
