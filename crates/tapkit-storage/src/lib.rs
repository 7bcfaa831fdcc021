//! # Tapkit Storage
//!
//! Object-storage collaborator for the Tapkit platform. User uploads (card
//! images, scanned documents) live under a per-user key prefix in the hosted
//! object bucket; when a user is deleted, their folder is cleaned up
//! best-effort before the directory record goes away.
//!
//! The crate provides:
//! - [`ObjectStore`]: the paginated list / batched delete seam
//! - [`HttpObjectStore`]: reqwest client for the hosted storage service
//! - [`MemoryObjectStore`]: in-memory store for tests and single-process use
//! - [`delete_folder`]: the sequential, no-recovery folder cleanup driver
//!
//! Cleanup is deliberately best-effort: callers log a failed cleanup and
//! proceed with the primary mutation. A failure mid-listing aborts the rest
//! of the cleanup, leaving orphaned objects behind.

pub mod cleanup;
pub mod http;
pub mod memory;
pub mod store;

pub use cleanup::{delete_folder, user_folder_prefix};
pub use http::{HttpObjectStore, StorageEndpoint};
pub use memory::MemoryObjectStore;
pub use store::{ObjectPage, ObjectStore, StorageError, StorageResult};
