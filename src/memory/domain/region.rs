//! Memory regions, their managers, and the process-level overview.

use super::MemoryCounters;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a memory region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionKind {
    /// Part of the managed heap.
    Heap,
    /// Outside the managed heap (code caches, metadata, and similar).
    NonHeap,
}

impl fmt::Display for RegionKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heap => formatter.write_str("HEAP"),
            Self::NonHeap => formatter.write_str("NON_HEAP"),
        }
    }
}

/// A usage threshold the host tracks for a region.
///
/// Present only when the host declares the capability for that region;
/// absence is a capability flag, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdInfo {
    /// Configured threshold, in bytes.
    pub bytes: u64,
    /// Number of times the threshold has been crossed.
    pub trip_count: u64,
}

/// Read-only, point-in-time view of one memory region.
///
/// Queried fresh from the host on every report; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRegion {
    /// Region name as reported by the host.
    pub name: String,
    /// Region category.
    pub kind: RegionKind,
    /// Names of the managers owning this region.
    pub managers: Vec<String>,
    /// Current usage counters.
    pub usage: MemoryCounters,
    /// Peak usage counters.
    pub peak: MemoryCounters,
    /// Usage as of the last reclamation pass, when the host tracks it.
    pub collection: Option<MemoryCounters>,
    /// Usage threshold, when the host declares support.
    pub usage_threshold: Option<ThresholdInfo>,
    /// Collection usage threshold, when the host declares support.
    pub collection_threshold: Option<ThresholdInfo>,
}

impl MemoryRegion {
    /// Creates a region snapshot with the mandatory dimensions.
    pub fn new(
        name: impl Into<String>,
        kind: RegionKind,
        managers: impl IntoIterator<Item = String>,
        usage: MemoryCounters,
        peak: MemoryCounters,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            managers: managers.into_iter().collect(),
            usage,
            peak,
            collection: None,
            usage_threshold: None,
            collection_threshold: None,
        }
    }

    /// Attaches collection usage counters.
    #[must_use]
    pub const fn with_collection(mut self, collection: MemoryCounters) -> Self {
        self.collection = Some(collection);
        self
    }

    /// Attaches a usage threshold.
    #[must_use]
    pub const fn with_usage_threshold(mut self, threshold: ThresholdInfo) -> Self {
        self.usage_threshold = Some(threshold);
        self
    }

    /// Attaches a collection usage threshold.
    #[must_use]
    pub const fn with_collection_threshold(mut self, threshold: ThresholdInfo) -> Self {
        self.collection_threshold = Some(threshold);
        self
    }
}

/// A named grouping owning a subset of memory regions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryManager {
    /// Manager name as reported by the host.
    pub name: String,
    /// Names of the regions this manager owns.
    pub region_names: Vec<String>,
}

impl MemoryManager {
    /// Creates a manager grouping.
    pub fn new(name: impl Into<String>, region_names: impl IntoIterator<Item = String>) -> Self {
        Self {
            name: name.into(),
            region_names: region_names.into_iter().collect(),
        }
    }
}

/// Process-level heap and non-heap counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryOverview {
    /// Aggregate counters for the managed heap.
    pub heap: MemoryCounters,
    /// Aggregate counters outside the managed heap.
    pub non_heap: MemoryCounters,
}

impl MemoryOverview {
    /// Creates an overview from heap and non-heap counters.
    #[must_use]
    pub const fn new(heap: MemoryCounters, non_heap: MemoryCounters) -> Self {
        Self { heap, non_heap }
    }
}
