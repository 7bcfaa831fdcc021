//! HTTP object store client
//!
//! Client for the hosted storage service's object API. Provides paginated
//! listing and batched deletion over JSON endpoints with bearer-key
//! authentication.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

use crate::store::{ObjectPage, ObjectStore, StorageError, StorageResult, MAX_DELETE_BATCH};

/// Storage service endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageEndpoint {
    /// Base URL of the storage service (e.g. http://localhost:9000)
    pub base_url: String,

    /// Bucket name the platform writes into
    pub bucket: String,

    /// API key for bearer authentication, if required
    pub api_key: Option<String>,
}

impl StorageEndpoint {
    /// Build a full URL by appending a path to the base URL.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

#[derive(Serialize)]
struct ListRequest<'a> {
    bucket: &'a str,
    prefix: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    cursor: Option<&'a str>,
}

#[derive(Serialize)]
struct DeleteRequest<'a> {
    bucket: &'a str,
    keys: &'a [String],
}

/// HTTP client for the hosted storage service.
///
/// # Examples
///
/// ```rust,no_run
/// use std::time::Duration;
/// use tapkit_storage::{HttpObjectStore, StorageEndpoint};
///
/// let endpoint = StorageEndpoint {
///     base_url: "http://localhost:9000".to_string(),
///     bucket: "tapkit-uploads".to_string(),
///     api_key: None,
/// };
/// let store = HttpObjectStore::new(endpoint, Duration::from_secs(30));
/// ```
#[derive(Clone)]
pub struct HttpObjectStore {
    /// HTTP client instance.
    client: Client,

    /// Service endpoint configuration.
    endpoint: StorageEndpoint,
}

impl HttpObjectStore {
    /// Create a new storage client.
    pub fn new(endpoint: StorageEndpoint, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, endpoint }
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.endpoint.api_key {
            Some(ref api_key) => request.header("Authorization", format!("Bearer {}", api_key)),
            None => request,
        }
    }

    async fn handle_response<T>(&self, response: reqwest::Response) -> StorageResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            error!("storage authentication failed");
            return Err(StorageError::AuthenticationFailed);
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("storage API error ({}): {}", status.as_u16(), message);
            return Err(StorageError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| StorageError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl ObjectStore for HttpObjectStore {
    #[instrument(skip(self), fields(prefix = %prefix))]
    async fn list_page(&self, prefix: &str, cursor: Option<&str>) -> StorageResult<ObjectPage> {
        debug!("listing objects under {}", prefix);

        let url = self.endpoint.url("/api/v1/objects/list");
        let body = ListRequest {
            bucket: &self.endpoint.bucket,
            prefix,
            cursor,
        };
        let request = self.authorize(self.client.post(&url).json(&body));

        let response = request.send().await?;
        self.handle_response(response).await
    }

    #[instrument(skip(self, keys), fields(count = keys.len()))]
    async fn delete_objects(&self, keys: &[String]) -> StorageResult<()> {
        if keys.len() > MAX_DELETE_BATCH {
            return Err(StorageError::BatchTooLarge(keys.len()));
        }
        if keys.is_empty() {
            return Ok(());
        }

        debug!("deleting {} objects", keys.len());

        let url = self.endpoint.url("/api/v1/objects/delete");
        let body = DeleteRequest {
            bucket: &self.endpoint.bucket,
            keys,
        };
        let request = self.authorize(self.client.post(&url).json(&body));

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            error!("storage authentication failed");
            return Err(StorageError::AuthenticationFailed);
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("storage API error ({}): {}", status.as_u16(), message);
            return Err(StorageError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_joining() {
        let endpoint = StorageEndpoint {
            base_url: "http://localhost:9000/".to_string(),
            bucket: "tapkit-uploads".to_string(),
            api_key: None,
        };

        assert_eq!(
            endpoint.url("/api/v1/objects/list"),
            "http://localhost:9000/api/v1/objects/list"
        );
        assert_eq!(
            endpoint.url("api/v1/objects/list"),
            "http://localhost:9000/api/v1/objects/list"
        );
    }
}
