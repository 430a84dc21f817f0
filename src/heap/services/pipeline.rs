//! Heap dump orchestration: capture, compress, publish, compose link.

use crate::heap::domain::{HeapSnapshot, SNAPSHOT_CONTENT_TYPE, ViewerLink};
use crate::heap::ports::{
    HeapCapture, HeapCaptureError, SnapshotPublishError, SnapshotPublisher,
};
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by the heap dump pipeline.
///
/// Capture-side failures ([`HeapDumpError::Capture`] and
/// [`HeapDumpError::Compression`]) occur before any upload is attempted;
/// [`HeapDumpError::Upload`] means the snapshot was captured but the publish
/// call failed. Callers word the two cases distinctly.
#[derive(Debug, Error)]
pub enum HeapDumpError {
    /// The capture collaborator failed; no upload was attempted.
    #[error(transparent)]
    Capture(#[from] HeapCaptureError),

    /// Compressing the snapshot failed; no upload was attempted.
    #[error("failed to compress heap snapshot: {0}")]
    Compression(#[source] std::io::Error),

    /// The publish collaborator failed after a successful capture.
    #[error(transparent)]
    Upload(#[from] SnapshotPublishError),
}

/// Captures a heap snapshot, compresses it, and publishes it.
///
/// One pipeline run per invocation; concurrent runs are not deduplicated.
/// The whole operation runs inside the dispatcher's executor task, off the
/// invocation thread.
#[derive(Clone)]
pub struct HeapDumpService<C, P>
where
    C: HeapCapture,
    P: SnapshotPublisher,
{
    capture: Arc<C>,
    publisher: Arc<P>,
    viewer_base_url: String,
}

impl<C, P> HeapDumpService<C, P>
where
    C: HeapCapture,
    P: SnapshotPublisher,
{
    /// Creates a pipeline over capture and publish collaborators.
    pub fn new(capture: Arc<C>, publisher: Arc<P>, viewer_base_url: impl Into<String>) -> Self {
        Self {
            capture,
            publisher,
            viewer_base_url: viewer_base_url.into(),
        }
    }

    /// Runs the full pipeline and returns the shareable viewer link.
    ///
    /// # Errors
    ///
    /// Returns [`HeapDumpError::Capture`] or [`HeapDumpError::Compression`]
    /// when the snapshot never becomes a payload (the publisher is not
    /// invoked), and [`HeapDumpError::Upload`] when publishing fails. No
    /// automatic retry in either case.
    pub async fn capture_and_publish(&self) -> Result<ViewerLink, HeapDumpError> {
        let snapshot = self.capture.capture().await?;
        let captured_at = snapshot.captured_at();
        let snapshot_bytes = snapshot.len();

        let payload = compress_snapshot(snapshot)?;
        tracing::debug!(
            snapshot_bytes,
            payload_bytes = payload.len(),
            %captured_at,
            "heap snapshot compressed"
        );

        let key = self
            .publisher
            .publish(payload, SNAPSHOT_CONTENT_TYPE)
            .await?;
        Ok(ViewerLink::compose(&self.viewer_base_url, &key))
    }
}

fn compress_snapshot(snapshot: HeapSnapshot) -> Result<Vec<u8>, HeapDumpError> {
    zstd::encode_all(snapshot.into_bytes().as_slice(), zstd::DEFAULT_COMPRESSION_LEVEL)
        .map_err(HeapDumpError::Compression)
}
