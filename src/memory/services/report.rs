//! Memory report generation.
//!
//! Snapshots the region source, pre-formats every byte counter, and renders
//! the operator-facing report through a static template.

use crate::memory::domain::{MemoryCounters, MemoryRegion, ThresholdInfo, format_bytes};
use crate::memory::ports::MemoryRegionSource;
use chrono::{DateTime, Utc};
use minijinja::Environment;
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Rendered for counters the host does not track.
const UNDEFINED_COUNTER: &str = "undefined";

const REPORT_TEMPLATE: &str = "\
=== Memory Overview ===
Generated at: {{ generated_at }}

>> Heap
  Init: {{ heap.init }}
  Used: {{ heap.used }}
  Committed: {{ heap.committed }}
  Max: {{ heap.max }}

>> Non-Heap
  Init: {{ non_heap.init }}
  Used: {{ non_heap.used }}
  Committed: {{ non_heap.committed }}
  Max: {{ non_heap.max }}

=== Memory Managers ===
{% for manager in managers -%}
{{ manager.name }} --> [{{ manager.regions }}]
{% endfor %}
=== Memory Regions ===
{% for region in regions -%}
>> {{ region.name }}
  Type: {{ region.kind }}
  Managers: [{{ region.managers }}]
{% if region.usage_threshold %}  Usage Threshold: {{ region.usage_threshold.bytes }}
  Usage Threshold Count: {{ region.usage_threshold.trips }}
{% endif -%}
{% if region.collection_threshold %}  Collection Usage Threshold: {{ region.collection_threshold.bytes }}
  Collection Usage Threshold Count: {{ region.collection_threshold.trips }}
{% endif -%}
  Usage:
    Init: {{ region.usage.init }}
    Used: {{ region.usage.used }}
    Committed: {{ region.usage.committed }}
    Max: {{ region.usage.max }}
  Peak Usage:
    Init: {{ region.peak.init }}
    Used: {{ region.peak.used }}
    Committed: {{ region.peak.committed }}
    Max: {{ region.peak.max }}
{% if region.collection %}  Collection Usage:
    Init: {{ region.collection.init }}
    Used: {{ region.collection.used }}
    Committed: {{ region.collection.committed }}
    Max: {{ region.collection.max }}
{% endif %}
{% endfor %}";

/// Errors returned while generating a memory report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MemoryReportError {
    /// The report template failed to render.
    #[error("failed to render memory report: {reason}")]
    Render {
        /// Template engine failure description.
        reason: String,
    },
}

#[derive(Serialize)]
struct CountersView {
    init: String,
    used: String,
    committed: String,
    max: String,
}

impl CountersView {
    fn from_counters(counters: &MemoryCounters) -> Self {
        Self {
            init: render_counter(counters.init),
            used: render_counter(counters.used),
            committed: render_counter(counters.committed),
            max: render_counter(counters.max),
        }
    }
}

fn render_counter(counter: Option<u64>) -> String {
    counter.map_or_else(|| UNDEFINED_COUNTER.to_owned(), format_bytes)
}

#[derive(Serialize)]
struct ThresholdView {
    bytes: String,
    trips: u64,
}

impl ThresholdView {
    fn from_threshold(threshold: &ThresholdInfo) -> Self {
        Self {
            bytes: format_bytes(threshold.bytes),
            trips: threshold.trip_count,
        }
    }
}

#[derive(Serialize)]
struct ManagerView {
    name: String,
    regions: String,
}

#[derive(Serialize)]
struct RegionView {
    name: String,
    kind: String,
    managers: String,
    usage: CountersView,
    peak: CountersView,
    collection: Option<CountersView>,
    usage_threshold: Option<ThresholdView>,
    collection_threshold: Option<ThresholdView>,
}

impl RegionView {
    fn from_region(region: &MemoryRegion) -> Self {
        Self {
            name: region.name.clone(),
            kind: region.kind.to_string(),
            managers: region.managers.join(", "),
            usage: CountersView::from_counters(&region.usage),
            peak: CountersView::from_counters(&region.peak),
            collection: region.collection.as_ref().map(CountersView::from_counters),
            usage_threshold: region
                .usage_threshold
                .as_ref()
                .map(ThresholdView::from_threshold),
            collection_threshold: region
                .collection_threshold
                .as_ref()
                .map(ThresholdView::from_threshold),
        }
    }
}

#[derive(Serialize)]
struct ReportView {
    generated_at: String,
    heap: CountersView,
    non_heap: CountersView,
    managers: Vec<ManagerView>,
    regions: Vec<RegionView>,
}

impl ReportView {
    fn build(source: &dyn MemoryRegionSource, generated_at: DateTime<Utc>) -> Self {
        let overview = source.overview();
        Self {
            generated_at: generated_at.to_rfc3339(),
            heap: CountersView::from_counters(&overview.heap),
            non_heap: CountersView::from_counters(&overview.non_heap),
            managers: source
                .managers()
                .into_iter()
                .map(|manager| ManagerView {
                    name: manager.name,
                    regions: manager.region_names.join(", "),
                })
                .collect(),
            regions: source
                .regions()
                .iter()
                .map(RegionView::from_region)
                .collect(),
        }
    }
}

/// Renders the operator-facing memory report.
///
/// Enumeration of a potentially large region set runs inside the
/// dispatcher's executor task, never on the invocation thread.
#[derive(Clone)]
pub struct MemoryReportService<S, C>
where
    S: MemoryRegionSource,
    C: Clock + Send + Sync,
{
    source: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> MemoryReportService<S, C>
where
    S: MemoryRegionSource,
    C: Clock + Send + Sync,
{
    /// Creates a report service over a region source.
    #[must_use]
    pub const fn new(source: Arc<S>, clock: Arc<C>) -> Self {
        Self { source, clock }
    }

    /// Generates the structured text report.
    ///
    /// Queries the region source fresh; nothing is cached between reports.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryReportError::Render`] when template rendering fails.
    pub fn generate_report(&self) -> Result<String, MemoryReportError> {
        let view = ReportView::build(&*self.source, self.clock.utc());
        let environment = Environment::new();
        environment
            .render_str(REPORT_TEMPLATE, view)
            .map_err(|error| MemoryReportError::Render {
                reason: error.to_string(),
            })
    }
}
