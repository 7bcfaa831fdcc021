//! # Tapkit Seats
//!
//! Organization seat model, staff separation lifecycle, and admin deletion
//! policy for the Tapkit digital business-card platform.
//!
//! ## Overview
//!
//! The tapkit-seats crate handles:
//! - **Seat counting**: seat usage computed on demand from the profile/user
//!   join; occupied seats are never freed automatically
//! - **Staff lifecycle**: Active → GracePeriod → (hard delete | permanent
//!   inactive individual), with a 30-day grace window
//! - **Deletion policy**: the decision table behind the admin delete-user
//!   surface, plus its executor wired to storage cleanup and events
//!
//! ## Architecture
//!
//! ```text
//! AdminService ──→ resolve_deletion (pure decision table)
//!      │                 │
//!      ├─ DirectoryStore (users / profiles / organizations)
//!      ├─ ObjectStore    (best-effort folder cleanup)
//!      └─ EventBus       (lifecycle announcements)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use tapkit_directory::{DirectoryStore, MemoryDirectory, Organization, Profile, User, UserRole};
//! use tapkit_seats::{organization_stats, StaffLifecycle};
//! use tapkit_events::MemoryEventBus;
//!
//! # async fn example() -> Result<(), tapkit_seats::SeatError> {
//! let directory = Arc::new(MemoryDirectory::new());
//! let admin = User::new("dana@acme.example", "Dana", UserRole::BusinessAdmin);
//! let admin_id = admin.id;
//! let org = Organization::new("Acme Corp", 25, admin_id);
//! let org_id = org.id;
//! directory.put_organization(org).await?;
//! directory.seed(admin, Profile::new(admin_id).with_company(org_id)).await?;
//!
//! let stats = organization_stats(directory.as_ref(), org_id).await?.unwrap();
//! assert_eq!(stats.occupied_seats, 1);
//!
//! let lifecycle = StaffLifecycle::new(directory, Arc::new(MemoryEventBus::new()));
//! # let _ = lifecycle;
//! # Ok(())
//! # }
//! ```

pub mod admin;
pub mod error;
pub mod lifecycle;
pub mod policy;
pub mod stats;

// Re-export main types for convenience
pub use admin::AdminService;
pub use error::{SeatError, SeatResult};
pub use lifecycle::{
    elapsed_grace_days, within_grace_window, FinalizeOutcome, StaffLifecycle, GRACE_PERIOD_DAYS,
};
pub use policy::{resolve_deletion, DeletionOutcome, DeletionRequest};
pub use stats::{organization_stats, SeatStats};
