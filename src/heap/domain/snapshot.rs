//! Captured heap snapshots and the shareable links they publish to.

use chrono::{DateTime, Utc};
use std::fmt;

/// Content-type tag submitted alongside published snapshot payloads.
pub const SNAPSHOT_CONTENT_TYPE: &str = "application/octet-stream";

/// An opaque heap snapshot captured from the running process.
///
/// Exists only long enough to be compressed and published; the pipeline owns
/// it exclusively and consumes it by value.
pub struct HeapSnapshot {
    bytes: Vec<u8>,
    captured_at: DateTime<Utc>,
}

impl HeapSnapshot {
    /// Creates a snapshot from captured bytes.
    #[must_use]
    pub const fn new(bytes: Vec<u8>, captured_at: DateTime<Utc>) -> Self {
        Self { bytes, captured_at }
    }

    /// Returns when the snapshot was captured.
    #[must_use]
    pub const fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Returns the snapshot size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns whether the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consumes the snapshot, yielding the raw bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl fmt::Debug for HeapSnapshot {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("HeapSnapshot")
            .field("bytes", &self.bytes.len())
            .field("captured_at", &self.captured_at)
            .finish()
    }
}

/// Shareable link to a published snapshot.
///
/// Composed from the viewer base URL and the publish collaborator's opaque
/// reference key; the key's structure is never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerLink(String);

impl ViewerLink {
    /// Composes a link from the viewer base URL and a reference key.
    #[must_use]
    pub fn compose(viewer_base_url: &str, key: &str) -> Self {
        Self(format!("{viewer_base_url}{key}"))
    }

    /// Returns the link as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewerLink {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
