//! Memory region enumeration contract.

use crate::memory::domain::{MemoryManager, MemoryOverview, MemoryRegion};

/// Enumeration of the host runtime's memory counters.
///
/// The region set, names, and raw counters are owned by the host runtime;
/// implementations expose a snapshot at call time. Reports query fresh on
/// every invocation and never cache results.
pub trait MemoryRegionSource: Send + Sync {
    /// Returns the process-level heap and non-heap counters.
    fn overview(&self) -> MemoryOverview;

    /// Returns the manager groupings.
    fn managers(&self) -> Vec<MemoryManager>;

    /// Returns every memory region the host tracks.
    fn regions(&self) -> Vec<MemoryRegion>;
}
