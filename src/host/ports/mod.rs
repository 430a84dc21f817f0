//! Port contracts for host server state and authorization.

mod permissions;
mod server;

pub use permissions::PermissionLookup;
pub use server::{HostPlayer, HostServer};
