//! Command registration, dispatch, and suggestion handling.
//!
//! This module carries the process-wide command abstraction shared by every
//! host adapter. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Orchestration services in [`services`]
//! - Bundled command groups in [`modules`]

pub mod domain;
pub mod modules;
pub mod ports;
pub mod services;
