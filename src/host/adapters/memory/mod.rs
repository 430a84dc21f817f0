//! In-memory host server and permission adapters.
//!
//! These adapters model one host instance without a live game runtime. They
//! are suitable for unit and integration tests and for deterministic
//! in-process embeddings.

mod permissions;
mod server;

pub use permissions::InMemoryPermissions;
pub use server::{InMemoryHostServer, InMemoryPlayer};
