//! In-memory object store
//!
//! Backs tests and single-process deployments. Keys are held in a sorted
//! map so listing pages are deterministic.

use async_trait::async_trait;
use std::collections::BTreeSet;
use tokio::sync::RwLock;

use crate::store::{ObjectPage, ObjectStore, StorageError, StorageResult, MAX_DELETE_BATCH};

/// In-memory object store.
///
/// Listing returns keys in lexicographic order, `page_size` at a time, using
/// the last key of a page as the continuation cursor. A failure can be armed
/// to exercise the abort-on-error cleanup path.
pub struct MemoryObjectStore {
    keys: RwLock<BTreeSet<String>>,
    page_size: usize,
    fail_listing_after: RwLock<Option<usize>>,
}

impl std::fmt::Debug for MemoryObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryObjectStore")
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl MemoryObjectStore {
    /// Create an empty store with the default page size.
    pub fn new() -> Self {
        Self::with_page_size(100)
    }

    /// Create an empty store with a custom listing page size.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            keys: RwLock::new(BTreeSet::new()),
            page_size: page_size.max(1),
            fail_listing_after: RwLock::new(None),
        }
    }

    /// Insert an object key.
    pub async fn put(&self, key: impl Into<String>) {
        self.keys.write().await.insert(key.into());
    }

    /// Number of stored objects.
    pub async fn len(&self) -> usize {
        self.keys.read().await.len()
    }

    /// Check whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.keys.read().await.is_empty()
    }

    /// Check whether any object remains under a prefix.
    pub async fn has_prefix(&self, prefix: &str) -> bool {
        self.keys
            .read()
            .await
            .iter()
            .any(|k| k.starts_with(prefix))
    }

    /// Arm a listing failure after `pages` successful pages.
    ///
    /// Used by tests to simulate a mid-listing service failure.
    pub async fn fail_listing_after(&self, pages: usize) {
        *self.fail_listing_after.write().await = Some(pages);
    }
}

impl Default for MemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn list_page(&self, prefix: &str, cursor: Option<&str>) -> StorageResult<ObjectPage> {
        {
            let mut armed = self.fail_listing_after.write().await;
            if let Some(remaining) = armed.as_mut() {
                if *remaining == 0 {
                    return Err(StorageError::ApiError {
                        status: 503,
                        message: "listing unavailable".to_string(),
                    });
                }
                *remaining -= 1;
            }
        }

        let keys = self.keys.read().await;
        let page: Vec<String> = keys
            .iter()
            .filter(|k| k.starts_with(prefix))
            .filter(|k| cursor.map_or(true, |c| k.as_str() > c))
            .take(self.page_size)
            .cloned()
            .collect();

        let next_cursor = if page.len() == self.page_size {
            page.last().cloned()
        } else {
            None
        };

        Ok(ObjectPage {
            keys: page,
            next_cursor,
        })
    }

    async fn delete_objects(&self, batch: &[String]) -> StorageResult<()> {
        if batch.len() > MAX_DELETE_BATCH {
            return Err(StorageError::BatchTooLarge(batch.len()));
        }
        let mut keys = self.keys.write().await;
        for key in batch {
            keys.remove(key);
        }
        Ok(())
    }
}
