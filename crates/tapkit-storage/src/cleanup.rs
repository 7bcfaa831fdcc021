//! Folder cleanup driver
//!
//! Deletes every object under a key prefix, one page at a time. Pages are
//! awaited sequentially with no parallelism and no partial-failure recovery:
//! an error mid-listing aborts the rest of the cleanup, leaving any
//! remaining objects orphaned. Callers treat cleanup as best-effort and log
//! the error instead of failing their primary operation.

use tracing::debug;

use crate::store::{ObjectStore, StorageResult};

/// Delete every object under `prefix`.
///
/// # Returns
///
/// The number of objects deleted before completion or abort.
///
/// # Errors
///
/// Returns the first listing or deletion error encountered. Objects already
/// deleted stay deleted; nothing is retried.
pub async fn delete_folder(store: &dyn ObjectStore, prefix: &str) -> StorageResult<u64> {
    let mut deleted: u64 = 0;
    let mut cursor: Option<String> = None;

    loop {
        let page = store.list_page(prefix, cursor.as_deref()).await?;

        if !page.keys.is_empty() {
            store.delete_objects(&page.keys).await?;
            deleted += page.keys.len() as u64;
        }

        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    debug!(prefix = %prefix, deleted, "folder cleanup finished");
    Ok(deleted)
}

/// The key prefix holding a user's uploads.
pub fn user_folder_prefix(user_id: impl std::fmt::Display) -> String {
    format!("users/{}/", user_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryObjectStore;
    use crate::store::StorageError;

    #[tokio::test]
    async fn test_delete_folder_drains_all_pages() {
        let store = MemoryObjectStore::with_page_size(3);
        for i in 0..10 {
            store.put(format!("users/u1/doc{:02}.png", i)).await;
        }
        store.put("users/u2/keep.png").await;

        let deleted = delete_folder(&store, "users/u1/").await.unwrap();

        assert_eq!(deleted, 10);
        assert!(!store.has_prefix("users/u1/").await);
        assert!(store.has_prefix("users/u2/").await);
    }

    #[tokio::test]
    async fn test_delete_folder_empty_prefix() {
        let store = MemoryObjectStore::new();
        let deleted = delete_folder(&store, "users/nobody/").await.unwrap();
        assert_eq!(deleted, 0);
    }

    #[tokio::test]
    async fn test_mid_listing_failure_aborts_without_retry() {
        let store = MemoryObjectStore::with_page_size(2);
        for i in 0..6 {
            store.put(format!("users/u1/doc{}.png", i)).await;
        }
        // First page succeeds, second listing fails.
        store.fail_listing_after(1).await;

        let err = delete_folder(&store, "users/u1/").await.unwrap_err();
        assert!(matches!(err, StorageError::ApiError { status: 503, .. }));

        // The first page is gone; the remainder is orphaned.
        assert_eq!(store.len().await, 4);
    }

    #[test]
    fn test_user_folder_prefix() {
        let id = "0190b2f0-0000-7000-8000-000000000000";
        assert_eq!(user_folder_prefix(id), format!("users/{}/", id));
    }
}
