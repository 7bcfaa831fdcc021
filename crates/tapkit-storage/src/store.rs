//! Object store seam

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of keys accepted in a single batched delete.
pub const MAX_DELETE_BATCH: usize = 1000;

/// Object store error types.
#[derive(Debug, Error)]
pub enum StorageError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Storage service returned an error response.
    #[error("Storage API error ({status}): {message}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Error message from the service.
        message: String,
    },

    /// Invalid response from the storage service.
    #[error("Invalid storage response: {0}")]
    InvalidResponse(String),

    /// Authentication failed.
    #[error("Storage authentication failed")]
    AuthenticationFailed,

    /// A batched delete exceeded the service limit.
    #[error("Delete batch of {0} keys exceeds limit of {MAX_DELETE_BATCH}")]
    BatchTooLarge(usize),
}

/// Result type for object store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// One page of an object listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectPage {
    /// Object keys in this page
    pub keys: Vec<String>,

    /// Cursor for the next page; `None` when the listing is exhausted
    pub next_cursor: Option<String>,
}

impl ObjectPage {
    /// An empty, final page.
    pub fn empty() -> Self {
        Self {
            keys: Vec::new(),
            next_cursor: None,
        }
    }
}

/// Paginated object listing and batched deletion.
///
/// The interface matches what the hosted bucket exposes: list one page of
/// keys under a prefix, delete up to [`MAX_DELETE_BATCH`] keys at a time.
/// There is no recursive delete primitive; folder cleanup is driven page by
/// page by [`delete_folder`](crate::delete_folder).
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List one page of object keys under a prefix.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Key prefix ("folder") to list under
    /// * `cursor` - Continuation cursor from the previous page, if any
    async fn list_page(&self, prefix: &str, cursor: Option<&str>) -> StorageResult<ObjectPage>;

    /// Delete a batch of objects.
    ///
    /// Keys that do not exist are ignored by the service. Batches larger
    /// than [`MAX_DELETE_BATCH`] are rejected.
    async fn delete_objects(&self, keys: &[String]) -> StorageResult<()>;
}
