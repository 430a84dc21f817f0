//! Domain model for heap snapshots and publish results.

mod snapshot;

pub use snapshot::{HeapSnapshot, SNAPSHOT_CONTENT_TYPE, ViewerLink};
