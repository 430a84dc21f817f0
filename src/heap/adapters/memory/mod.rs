//! In-memory capture and publish adapters.
//!
//! Deterministic collaborators for tests and local embeddings: a capture
//! source with a fixed payload and a publisher that records submissions.

mod capture;
mod publisher;

pub use capture::InMemoryHeapCapture;
pub use publisher::RecordingPublisher;
