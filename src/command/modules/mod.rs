//! Bundled command groups registered at platform bootstrap.

mod memory;

pub use memory::MemoryModule;
