//! Adapter implementations for memory region enumeration.

pub mod memory;
