//! Publisher adapter recording every submission.

use crate::heap::ports::{SnapshotPublishError, SnapshotPublisher};
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory [`SnapshotPublisher`] returning a fixed key.
///
/// Records every submission, including failed ones, so tests can assert on
/// call counts and payloads.
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    key: String,
    failure: Option<String>,
    submissions: Mutex<Vec<(Vec<u8>, String)>>,
}

impl RecordingPublisher {
    /// Creates a publisher answering every submission with the given key.
    #[must_use]
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            failure: None,
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// Creates a publisher that always fails with the given reason.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            key: String::new(),
            failure: Some(reason.into()),
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// Returns how many publishes have been attempted.
    #[must_use]
    pub fn publish_count(&self) -> usize {
        self.submissions.lock().map(|s| s.len()).unwrap_or(0)
    }

    /// Returns the most recent payload, when one was submitted.
    #[must_use]
    pub fn last_payload(&self) -> Option<Vec<u8>> {
        self.submissions
            .lock()
            .ok()
            .and_then(|s| s.last().map(|(payload, _)| payload.clone()))
    }

    /// Returns the most recent content-type tag, when one was submitted.
    #[must_use]
    pub fn last_content_type(&self) -> Option<String> {
        self.submissions
            .lock()
            .ok()
            .and_then(|s| s.last().map(|(_, content_type)| content_type.clone()))
    }
}

#[async_trait]
impl SnapshotPublisher for RecordingPublisher {
    async fn publish(
        &self,
        payload: Vec<u8>,
        content_type: &str,
    ) -> Result<String, SnapshotPublishError> {
        if let Ok(mut submissions) = self.submissions.lock() {
            submissions.push((payload, content_type.to_owned()));
        }
        match &self.failure {
            Some(reason) => Err(SnapshotPublishError::new(std::io::Error::other(
                reason.clone(),
            ))),
            None => Ok(self.key.clone()),
        }
    }
}
