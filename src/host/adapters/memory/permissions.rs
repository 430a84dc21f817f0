//! In-memory permission store keyed by identity and node.

use crate::host::domain::HostIdentity;
use crate::host::ports::PermissionLookup;
use std::collections::HashSet;
use std::sync::RwLock;

/// In-memory permission store with explicit grants.
///
/// An `allow_all` store answers every query positively, matching hosts that
/// treat non-player senders as operators.
#[derive(Debug, Default)]
pub struct InMemoryPermissions {
    allow_all: bool,
    grants: RwLock<HashSet<(HostIdentity, String)>>,
}

impl InMemoryPermissions {
    /// Creates a store with no grants.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store granting every node to every identity.
    #[must_use]
    pub fn allow_all() -> Self {
        Self {
            allow_all: true,
            grants: RwLock::new(HashSet::new()),
        }
    }

    /// Grants a permission node to an identity.
    pub fn grant(&self, identity: HostIdentity, node: impl Into<String>) {
        if let Ok(mut grants) = self.grants.write() {
            grants.insert((identity, node.into()));
        }
    }

    /// Revokes a permission node from an identity.
    pub fn revoke(&self, identity: HostIdentity, node: &str) {
        if let Ok(mut grants) = self.grants.write() {
            grants.retain(|(granted, granted_node)| {
                *granted != identity || granted_node != node
            });
        }
    }
}

impl PermissionLookup for InMemoryPermissions {
    fn has_permission(&self, identity: &HostIdentity, node: &str) -> bool {
        if self.allow_all {
            return true;
        }
        self.grants
            .read()
            .map(|grants| grants.contains(&(*identity, node.to_owned())))
            .unwrap_or(false)
    }
}
