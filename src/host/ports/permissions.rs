//! Authorization collaborator contract.

use crate::host::domain::HostIdentity;

/// Permission queries against the host's authorization store.
///
/// Queried fresh per command and per sender enumeration; implementations
/// must not assume caching. A pure query with no side effects.
pub trait PermissionLookup: Send + Sync {
    /// Returns whether the identity holds the permission node.
    fn has_permission(&self, identity: &HostIdentity, node: &str) -> bool;
}
