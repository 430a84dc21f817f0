//! Host adapter pattern: one thin shim per host command framework.
//!
//! A host adapter translates host-specific invocation events and sender
//! objects into calls against the command dispatcher and the sender
//! abstraction, and answers only for its own host instance when several
//! instances share a process. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The adapter shim itself in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
