//! Ambient project identity resolution.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::OnceCell;

const METADATA_TIMEOUT: Duration = Duration::from_secs(2);
const DEFAULT_METADATA_HOST: &str = "169.254.169.254";

/// Resolves the project identifier from the execution environment.
///
/// Implementations must treat every failure as "no identity": resolution
/// never propagates an error into request handling.
#[async_trait]
pub trait ProjectIdentityResolver: Send + Sync {
    async fn project_id(&self) -> Option<String>;
}

#[derive(Debug, Error)]
#[error("project id unavailable from environment and metadata server")]
struct IdentityUnavailable;

/// Production resolver: `GOOGLE_CLOUD_PROJECT` if set, otherwise the GCE
/// metadata server. A successful metadata lookup is cached for the process
/// lifetime; failures are not cached, so a later request may succeed once
/// the metadata server becomes reachable.
#[derive(Debug, Default)]
pub struct MetadataResolver {
    cached: OnceCell<String>,
}

impl MetadataResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query the metadata server for the project id.
    ///
    /// The host can be overridden via `GCE_METADATA_HOST`.
    async fn fetch_from_metadata(&self) -> Result<String, IdentityUnavailable> {
        let host =
            env::var("GCE_METADATA_HOST").unwrap_or_else(|_| DEFAULT_METADATA_HOST.to_string());
        let url = format!("http://{host}/computeMetadata/v1/project/project-id");

        let client = reqwest::Client::builder()
            .timeout(METADATA_TIMEOUT)
            .build()
            .map_err(|_| IdentityUnavailable)?;
        let response = client
            .get(&url)
            .header("Metadata-Flavor", "Google")
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|_| IdentityUnavailable)?;
        let body = response.text().await.map_err(|_| IdentityUnavailable)?;

        let project_id = body.trim();
        if project_id.is_empty() {
            return Err(IdentityUnavailable);
        }
        Ok(project_id.to_string())
    }
}

#[async_trait]
impl ProjectIdentityResolver for MetadataResolver {
    async fn project_id(&self) -> Option<String> {
        if let Ok(project_id) = env::var("GOOGLE_CLOUD_PROJECT") {
            if !project_id.is_empty() {
                return Some(project_id);
            }
        }
        self.cached
            .get_or_try_init(|| self.fetch_from_metadata())
            .await
            .ok()
            .cloned()
    }
}

/// Test double returning a fixed project id.
#[derive(Debug, Clone)]
pub struct FixedResolver(pub String);

#[async_trait]
impl ProjectIdentityResolver for FixedResolver {
    async fn project_id(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Test double for an environment with no ambient credentials.
#[derive(Debug, Clone, Copy)]
pub struct NoIdentity;

#[async_trait]
impl ProjectIdentityResolver for NoIdentity {
    async fn project_id(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_resolver() {
        let resolver = FixedResolver("my-proj".to_string());
        assert_eq!(resolver.project_id().await.as_deref(), Some("my-proj"));
    }

    #[tokio::test]
    async fn test_no_identity() {
        assert_eq!(NoIdentity.project_id().await, None);
    }
}
