//! Heap capture collaborator contract.

use crate::heap::domain::HeapSnapshot;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by the capture collaborator.
#[derive(Debug, Clone, Error)]
#[error("heap capture failed: {0}")]
pub struct HeapCaptureError(Arc<dyn std::error::Error + Send + Sync>);

impl HeapCaptureError {
    /// Wraps a capture collaborator failure.
    pub fn new(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(error))
    }
}

/// Produces heap snapshots of the running process.
///
/// Capture commonly takes seconds; implementations are awaited inside the
/// dispatcher's executor task, off the host's main thread.
#[async_trait]
pub trait HeapCapture: Send + Sync {
    /// Captures a snapshot of live memory state.
    ///
    /// # Errors
    ///
    /// Returns [`HeapCaptureError`] when the host mechanism fails; the
    /// pipeline reports this as a capture error and never attempts an
    /// upload.
    async fn capture(&self) -> Result<HeapSnapshot, HeapCaptureError>;
}
