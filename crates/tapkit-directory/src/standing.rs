//! Account standing
//!
//! This module defines the lifecycle standing of a user account. The
//! separation timestamp is carried as a payload of the `GracePeriod` variant,
//! so a grace-period account without a separation time cannot be represented.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle standing of a user account.
///
/// Staff separation moves an account from `Active` to
/// `GracePeriod { since }`. Resolving the grace period either deletes the
/// user row outright or parks the account as `Inactive` (a permanent
/// individual whose organization seat stays occupied).
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use tapkit_directory::AccountStanding;
///
/// let standing = AccountStanding::GracePeriod { since: Utc::now() };
/// assert!(standing.is_grace_period());
/// assert!(standing.separated_at().is_some());
///
/// assert_eq!(AccountStanding::Active.separated_at(), None);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AccountStanding {
    /// Normal account in good standing
    Active,

    /// Separated staff, within the deletion policy window
    GracePeriod {
        /// When the staff member was separated
        since: DateTime<Utc>,
    },

    /// Permanently parked account (finalized individual)
    Inactive,
}

impl AccountStanding {
    /// The separation timestamp, if the account is in its grace period.
    pub fn separated_at(&self) -> Option<DateTime<Utc>> {
        match self {
            AccountStanding::GracePeriod { since } => Some(*since),
            _ => None,
        }
    }

    /// Check if the account is in normal standing.
    pub fn is_active(&self) -> bool {
        matches!(self, AccountStanding::Active)
    }

    /// Check if the account is a separated staff member awaiting resolution.
    pub fn is_grace_period(&self) -> bool {
        matches!(self, AccountStanding::GracePeriod { .. })
    }

    /// Check if the account has been parked permanently.
    pub fn is_inactive(&self) -> bool {
        matches!(self, AccountStanding::Inactive)
    }

    /// Get string representation of the standing.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStanding::Active => "active",
            AccountStanding::GracePeriod { .. } => "grace_period",
            AccountStanding::Inactive => "inactive",
        }
    }
}

impl Default for AccountStanding {
    fn default() -> Self {
        Self::Active
    }
}
