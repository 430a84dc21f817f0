//! In-memory region source adapter.

mod source;

pub use source::InMemoryRegionSource;
