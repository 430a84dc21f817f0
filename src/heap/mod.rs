//! Heap snapshot pipeline: capture, compress, publish.
//!
//! The heap-capture mechanism and the upload transport are external
//! collaborators; this module orchestrates them and composes the shareable
//! viewer link. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The pipeline service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
