//! Port contracts for memory region enumeration.

mod source;

pub use source::MemoryRegionSource;
