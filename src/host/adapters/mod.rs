//! Adapter implementations for host server and permission ports.

pub mod memory;
