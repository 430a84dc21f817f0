//! Adapter implementations for heap capture and publish ports.

pub mod memory;
