//! Publish collaborator contract for uploaded snapshot payloads.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by the publish collaborator.
#[derive(Debug, Clone, Error)]
#[error("snapshot publish failed: {0}")]
pub struct SnapshotPublishError(Arc<dyn std::error::Error + Send + Sync>);

impl SnapshotPublishError {
    /// Wraps a publish transport failure.
    pub fn new(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(error))
    }
}

/// Accepts a compressed payload and returns an opaque retrieval key.
///
/// The transport (HTTP client, retry policy, endpoints) is external; the
/// pipeline treats the returned key as an opaque string to compose into a
/// viewer link.
#[async_trait]
pub trait SnapshotPublisher: Send + Sync {
    /// Submits a payload with its content-type tag.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotPublishError`] on network or I/O failure; the
    /// pipeline reports this as an upload error and never retries
    /// automatically.
    async fn publish(
        &self,
        payload: Vec<u8>,
        content_type: &str,
    ) -> Result<String, SnapshotPublishError>;
}
