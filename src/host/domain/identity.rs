//! Identity tokens for host instances and senders.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for one host server instance.
///
/// Several host instances may coexist in a single process; adapters compare
/// this identifier to decide whether an invocation event is theirs to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostInstanceId(Uuid);

impl HostInstanceId {
    /// Creates a new random host instance identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a host instance identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for HostInstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HostInstanceId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Identity token a sender is known by within its host instance.
///
/// Sender equality is defined over this token together with the owning
/// instance, never over display names: two senders sharing a name but
/// wrapping different host objects are distinct. The permission collaborator
/// is queried with this token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostIdentity {
    /// The host console / administrator identity.
    Console,
    /// A connected player, identified by stable UUID.
    Player(Uuid),
    /// A sender the host exposes no stable identity for.
    Other,
}
