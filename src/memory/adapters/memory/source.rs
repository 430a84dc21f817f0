//! Region source backed by in-memory data.

use crate::memory::domain::{MemoryManager, MemoryOverview, MemoryRegion};
use crate::memory::ports::MemoryRegionSource;
use std::sync::RwLock;

/// In-memory [`MemoryRegionSource`].
///
/// Holds a fixed overview, manager, and region dataset; suitable for tests
/// and for embeddings without a live runtime feed. The dataset can be
/// replaced to model counters moving between reports.
#[derive(Debug, Default)]
pub struct InMemoryRegionSource {
    state: RwLock<SourceState>,
}

#[derive(Debug, Default)]
struct SourceState {
    overview: MemoryOverview,
    managers: Vec<MemoryManager>,
    regions: Vec<MemoryRegion>,
}

impl InMemoryRegionSource {
    /// Creates a source over the given dataset.
    #[must_use]
    pub fn new(
        overview: MemoryOverview,
        managers: Vec<MemoryManager>,
        regions: Vec<MemoryRegion>,
    ) -> Self {
        Self {
            state: RwLock::new(SourceState {
                overview,
                managers,
                regions,
            }),
        }
    }

    /// Replaces the entire dataset.
    pub fn replace(
        &self,
        overview: MemoryOverview,
        managers: Vec<MemoryManager>,
        regions: Vec<MemoryRegion>,
    ) {
        if let Ok(mut state) = self.state.write() {
            state.overview = overview;
            state.managers = managers;
            state.regions = regions;
        }
    }
}

impl MemoryRegionSource for InMemoryRegionSource {
    fn overview(&self) -> MemoryOverview {
        self.state
            .read()
            .map(|state| state.overview)
            .unwrap_or_default()
    }

    fn managers(&self) -> Vec<MemoryManager> {
        self.state
            .read()
            .map(|state| state.managers.clone())
            .unwrap_or_default()
    }

    fn regions(&self) -> Vec<MemoryRegion> {
        self.state
            .read()
            .map(|state| state.regions.clone())
            .unwrap_or_default()
    }
}
