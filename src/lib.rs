//! Manometer: an embedded runtime diagnostics layer.
//!
//! This crate provides the cross-host command dispatch and diagnostic
//! capture pipeline for a long-lived host process: operators issue commands
//! against the running process to retrieve a memory-region usage report or a
//! heap snapshot that is compressed, published, and returned as a shareable
//! link.
//!
//! # Architecture
//!
//! Manometer follows hexagonal architecture principles:
//!
//! - **Domain**: Pure diagnostic types with no host dependencies
//! - **Ports**: Abstract trait interfaces for host and transport
//!   collaborators
//! - **Adapters**: Concrete implementations of ports (host shims, in-memory
//!   doubles)
//!
//! # Modules
//!
//! - [`command`]: Sender abstraction, command registry, and dispatcher
//! - [`host`]: Host adapter pattern binding one host instance to the
//!   dispatcher
//! - [`memory`]: Memory-region snapshots and the operator-facing report
//! - [`heap`]: Heap snapshot capture, compression, and publishing
//! - [`config`]: Platform configuration supplied by the embedding host

pub mod command;
pub mod config;
pub mod heap;
pub mod host;
pub mod memory;
