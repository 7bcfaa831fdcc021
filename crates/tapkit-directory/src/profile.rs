//! Profile domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The public-card record linked one-to-one to a user.
///
/// A non-null `company_id` means the profile occupies a seat in that
/// organization. The link is a weak, seat-counting reference: it is never
/// cleared when the user's role reverts to individual, so the seat stays
/// occupied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier for the profile
    pub id: Uuid,

    /// Owning user (one-to-one)
    pub user_id: Uuid,

    /// Organization whose seat this profile occupies, if any
    pub company_id: Option<Uuid>,

    /// URL-friendly slug for the public card
    pub slug: Option<String>,

    /// Job title shown on the card
    pub title: Option<String>,

    /// Contact phone shown on the card
    pub phone: Option<String>,

    /// When the profile was created
    pub created_at: DateTime<Utc>,

    /// When the profile was last updated
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Creates a new profile for a user, not linked to any organization.
    pub fn new(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            user_id,
            company_id: None,
            slug: None,
            title: None,
            phone: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Link the profile to an organization, occupying one of its seats.
    pub fn with_company(mut self, company_id: Uuid) -> Self {
        self.company_id = Some(company_id);
        self
    }

    /// Set the public-card slug.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Set the job title shown on the card.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Check if this profile occupies a seat in the given organization.
    pub fn occupies_seat_in(&self, org_id: Uuid) -> bool {
        self.company_id == Some(org_id)
    }
}
