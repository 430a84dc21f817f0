//! Port contracts for heap capture and snapshot publishing.

mod capture;
mod publisher;

pub use capture::{HeapCapture, HeapCaptureError};
pub use publisher::{SnapshotPublishError, SnapshotPublisher};
