//! Event envelope and lifecycle event constructors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Topic announced when an admin separates a staff member.
pub const TOPIC_STAFF_SEPARATED: &str = "staff.separated";

/// Topic announced when a grace period is resolved (either way).
pub const TOPIC_STAFF_FINALIZED: &str = "staff.finalized";

/// Topic announced when a user row is hard-deleted.
pub const TOPIC_USER_DELETED: &str = "user.deleted";

/// Topic announced when an organization's designated admin changes.
pub const TOPIC_ADMIN_REASSIGNED: &str = "organization.admin_reassigned";

/// Event envelope.
///
/// All lifecycle events share this envelope, which carries routing and
/// context metadata alongside a JSON payload.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use tapkit_events::Event;
///
/// let event = Event::new("staff.separated", serde_json::json!({"days": 0}))
///     .with_org(Uuid::now_v7());
/// assert_eq!(event.topic, "staff.separated");
/// assert!(event.org_id.is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Unique event ID
    pub id: Uuid,

    /// Dot-separated topic (e.g. "staff.separated")
    pub topic: String,

    /// When the event occurred
    pub occurred_at: DateTime<Utc>,

    /// Organization context
    pub org_id: Option<Uuid>,

    /// Subject user (the user the event is about)
    pub user_id: Option<Uuid>,

    /// Acting user (the admin who triggered the event)
    pub actor_id: Option<Uuid>,

    /// Event payload
    pub payload: serde_json::Value,
}

impl Event {
    /// Create a new event.
    ///
    /// # Arguments
    ///
    /// * `topic` - Dot-separated topic string
    /// * `payload` - The event payload
    pub fn new(topic: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            id: Uuid::now_v7(),
            topic: topic.into(),
            occurred_at: Utc::now(),
            org_id: None,
            user_id: None,
            actor_id: None,
            payload,
        }
    }

    /// Set organization context.
    pub fn with_org(mut self, org_id: Uuid) -> Self {
        self.org_id = Some(org_id);
        self
    }

    /// Set the subject user.
    pub fn with_user(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Set the acting user.
    pub fn with_actor(mut self, actor_id: Uuid) -> Self {
        self.actor_id = Some(actor_id);
        self
    }

    /// Parse the payload into a specific type.
    pub fn parse_payload<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }

    /// A staff member entered their grace period.
    pub fn staff_separated(actor_id: Uuid, staff_id: Uuid) -> Self {
        Self::new(TOPIC_STAFF_SEPARATED, serde_json::json!({}))
            .with_actor(actor_id)
            .with_user(staff_id)
    }

    /// A grace period was resolved.
    ///
    /// `deleted` distinguishes the hard-delete outcome from the
    /// permanent-individual downgrade.
    pub fn staff_finalized(staff_id: Uuid, deleted: bool) -> Self {
        Self::new(
            TOPIC_STAFF_FINALIZED,
            serde_json::json!({ "deleted": deleted }),
        )
        .with_user(staff_id)
    }

    /// A user row was hard-deleted.
    pub fn user_deleted(actor_id: Uuid, target_id: Uuid) -> Self {
        Self::new(TOPIC_USER_DELETED, serde_json::json!({}))
            .with_actor(actor_id)
            .with_user(target_id)
    }

    /// An organization's designated admin changed.
    pub fn admin_reassigned(org_id: Uuid, successor_id: Uuid) -> Self {
        Self::new(
            TOPIC_ADMIN_REASSIGNED,
            serde_json::json!({ "successor": successor_id }),
        )
        .with_org(org_id)
    }
}
