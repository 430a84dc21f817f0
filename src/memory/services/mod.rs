//! Report rendering services for memory diagnostics.

mod report;

pub use report::{MemoryReportError, MemoryReportService};
