//! The capture-compress-publish pipeline service.

mod pipeline;

pub use pipeline::{HeapDumpError, HeapDumpService};
