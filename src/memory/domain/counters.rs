//! Point-in-time counters for one memory region dimension set.

use serde::{Deserialize, Serialize};

/// Read-only usage counters, in bytes.
///
/// A `None` counter is the host's "not tracked" sentinel for that dimension;
/// it is rendered distinctly from zero, never coerced to `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCounters {
    /// Initially requested capacity.
    pub init: Option<u64>,
    /// Currently used bytes.
    pub used: Option<u64>,
    /// Bytes committed by the runtime.
    pub committed: Option<u64>,
    /// Maximum capacity.
    pub max: Option<u64>,
}

impl MemoryCounters {
    /// Creates counters with every dimension tracked.
    #[must_use]
    pub const fn new(init: u64, used: u64, committed: u64, max: u64) -> Self {
        Self {
            init: Some(init),
            used: Some(used),
            committed: Some(committed),
            max: Some(max),
        }
    }

    /// Creates counters with untracked `init` and `max` dimensions.
    #[must_use]
    pub const fn partial(used: u64, committed: u64) -> Self {
        Self {
            init: None,
            used: Some(used),
            committed: Some(committed),
            max: None,
        }
    }
}
