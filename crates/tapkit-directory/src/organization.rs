//! Organization domain model
//!
//! Organizations are the seat-holding tenants of the platform. Each carries
//! a fixed seat allowance and a designated admin. Seat occupancy itself lives
//! on [`Profile::company_id`](crate::Profile), never on the organization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An organization holding staff seats.
///
/// The `admin_id` must reference a user with the BusinessAdmin or SuperAdmin
/// role. The at-least-one-admin invariant is enforced procedurally by the
/// deletion policy, not by the datastore.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use tapkit_directory::Organization;
///
/// let admin_id = Uuid::now_v7();
/// let org = Organization::new("Acme Corp", 25, admin_id);
/// assert_eq!(org.max_seats, 25);
/// assert_eq!(org.admin_id, admin_id);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// Unique identifier for the organization
    pub id: Uuid,

    /// Human-readable name
    pub name: String,

    /// Total seat allowance
    pub max_seats: u32,

    /// Designated organization admin
    pub admin_id: Uuid,

    /// When the organization was created
    pub created_at: DateTime<Utc>,

    /// When the organization was last updated
    pub updated_at: DateTime<Utc>,
}

impl Organization {
    /// Creates a new organization.
    ///
    /// # Arguments
    ///
    /// * `name` - The organization name
    /// * `max_seats` - Total seat allowance
    /// * `admin_id` - The designated admin user ID
    pub fn new(name: impl Into<String>, max_seats: u32, admin_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            max_seats,
            admin_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reassign the designated admin.
    pub fn reassign_admin(&mut self, successor: Uuid) {
        self.admin_id = successor;
        self.updated_at = Utc::now();
    }
}
