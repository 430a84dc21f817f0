//! Capture adapter producing snapshots from a fixed payload.

use crate::heap::domain::HeapSnapshot;
use crate::heap::ports::{HeapCapture, HeapCaptureError};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory [`HeapCapture`] with a fixed payload or a forced failure.
#[derive(Debug, Default)]
pub struct InMemoryHeapCapture {
    payload: Vec<u8>,
    failure: Option<String>,
    captures: AtomicUsize,
}

impl InMemoryHeapCapture {
    /// Creates a capture source yielding the given payload.
    #[must_use]
    pub fn with_payload(payload: Vec<u8>) -> Self {
        Self {
            payload,
            failure: None,
            captures: AtomicUsize::new(0),
        }
    }

    /// Creates a capture source that always fails with the given reason.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            payload: Vec::new(),
            failure: Some(reason.into()),
            captures: AtomicUsize::new(0),
        }
    }

    /// Returns how many captures have been attempted.
    #[must_use]
    pub fn capture_count(&self) -> usize {
        self.captures.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HeapCapture for InMemoryHeapCapture {
    async fn capture(&self) -> Result<HeapSnapshot, HeapCaptureError> {
        self.captures.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(reason) => Err(HeapCaptureError::new(std::io::Error::other(reason.clone()))),
            None => Ok(HeapSnapshot::new(self.payload.clone(), Utc::now())),
        }
    }
}
