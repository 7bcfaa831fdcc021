//! # Tapkit Directory
//!
//! This crate provides the user, profile, and organization directory for the
//! Tapkit digital business-card platform, shared across the card, leads, and
//! admin services.
//!
//! ## Overview
//!
//! The tapkit-directory crate handles:
//! - **Users**: Identity records with a platform role and account standing
//! - **Profiles**: The public-card record linked one-to-one to a user,
//!   optionally occupying a seat in an organization
//! - **Organizations**: Seat-holding tenants with a designated admin
//! - **Store**: The `DirectoryStore` seam over the relational datastore,
//!   with an in-memory implementation for single-process use and tests
//!
//! ## Architecture
//!
//! ```text
//! User (role, standing)
//!   └─ Profile ──(company_id)──→ Organization (max_seats, admin_id)
//! ```
//!
//! A profile's `company_id` marks seat occupancy. It is deliberately retained
//! even after a separated staff member is finalized as a permanent individual,
//! so the seat stays occupied.
//!
//! ## Usage
//!
//! ```rust
//! use tapkit_directory::{Organization, Profile, User, UserRole};
//!
//! let admin = User::new("dana@acme.example", "Dana", UserRole::BusinessAdmin);
//! let org = Organization::new("Acme Corp", 25, admin.id);
//!
//! let staff = User::new("kim@acme.example", "Kim", UserRole::BusinessStaff);
//! let profile = Profile::new(staff.id).with_company(org.id);
//! assert_eq!(profile.company_id, Some(org.id));
//! ```

pub mod organization;
pub mod profile;
pub mod roles;
pub mod standing;
pub mod store;
pub mod user;

// Re-export main types for convenience
pub use organization::Organization;
pub use profile::Profile;
pub use roles::UserRole;
pub use standing::AccountStanding;
pub use store::{DirectoryError, DirectoryResult, DirectoryStore, MemoryDirectory};
pub use user::User;
