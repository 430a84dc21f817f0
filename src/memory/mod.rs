//! Memory diagnostics: region snapshots and the operator-facing report.
//!
//! The set of memory regions, their names, and raw counters come from the
//! host runtime; this module only consumes that enumeration, normalizes it,
//! and renders it. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Report rendering in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
