//! Domain model for memory region snapshots.

mod counters;
mod format;
mod region;

pub use counters::MemoryCounters;
pub use format::format_bytes;
pub use region::{MemoryManager, MemoryOverview, MemoryRegion, RegionKind, ThresholdInfo};
