//! Sender abstraction instances backed by host objects.

use crate::command::ports::CommandSender;
use crate::host::domain::{HostIdentity, HostInstanceId};
use crate::host::ports::{HostPlayer, HostServer, PermissionLookup};
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use uuid::Uuid;

/// Display name of the console sender.
const CONSOLE_NAME: &str = "Console";

enum SenderChannel {
    Console(Arc<dyn HostServer>),
    Player(Arc<dyn HostPlayer>),
    Suppressed { kind: String },
}

/// A [`CommandSender`] wrapping one host object.
///
/// Created per invocation or per enumeration query by the host adapter and
/// discarded afterwards. Equality and hashing are defined over the owning
/// instance and the wrapped identity token, never the display name.
pub struct HostSender {
    instance: HostInstanceId,
    identity: HostIdentity,
    channel: SenderChannel,
    permissions: Arc<dyn PermissionLookup>,
}

impl HostSender {
    /// Wraps the console of a host server instance.
    #[must_use]
    pub fn console(server: Arc<dyn HostServer>, permissions: Arc<dyn PermissionLookup>) -> Self {
        Self {
            instance: server.instance_id(),
            identity: HostIdentity::Console,
            channel: SenderChannel::Console(server),
            permissions,
        }
    }

    /// Wraps a connected player.
    #[must_use]
    pub fn player(
        instance: HostInstanceId,
        player: Arc<dyn HostPlayer>,
        permissions: Arc<dyn PermissionLookup>,
    ) -> Self {
        Self {
            instance,
            identity: HostIdentity::Player(player.unique_id()),
            channel: SenderChannel::Player(player),
            permissions,
        }
    }

    /// Wraps a host object the adapter cannot address messages to.
    ///
    /// `kind` is a short host-side type tag; message delivery is suppressed
    /// with a debug log entry.
    #[must_use]
    pub fn unaddressable(
        instance: HostInstanceId,
        kind: impl Into<String>,
        permissions: Arc<dyn PermissionLookup>,
    ) -> Self {
        Self {
            instance,
            identity: HostIdentity::Other,
            channel: SenderChannel::Suppressed { kind: kind.into() },
            permissions,
        }
    }

    /// Returns the identity token this sender is known by.
    #[must_use]
    pub const fn identity(&self) -> HostIdentity {
        self.identity
    }

    /// Returns the host instance this sender belongs to.
    #[must_use]
    pub const fn instance(&self) -> HostInstanceId {
        self.instance
    }
}

impl CommandSender for HostSender {
    fn name(&self) -> String {
        match &self.channel {
            SenderChannel::Console(_) => CONSOLE_NAME.to_owned(),
            SenderChannel::Player(player) => player.name(),
            SenderChannel::Suppressed { kind } => format!("unknown:{kind}"),
        }
    }

    fn unique_id(&self) -> Option<Uuid> {
        match self.identity {
            HostIdentity::Player(uuid) => Some(uuid),
            HostIdentity::Console | HostIdentity::Other => None,
        }
    }

    fn send_message(&self, message: &str) {
        match &self.channel {
            SenderChannel::Console(server) => server.deliver_console(message),
            SenderChannel::Player(player) => player.deliver(message),
            SenderChannel::Suppressed { kind } => {
                tracing::debug!(kind, "dropping message for unaddressable sender");
            }
        }
    }

    fn has_permission(&self, node: &str) -> bool {
        self.permissions.has_permission(&self.identity, node)
    }
}

impl std::fmt::Debug for HostSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostSender")
            .field("instance", &self.instance)
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

impl PartialEq for HostSender {
    fn eq(&self, other: &Self) -> bool {
        self.instance == other.instance && self.identity == other.identity
    }
}

impl Eq for HostSender {}

impl Hash for HostSender {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instance.hash(state);
        self.identity.hash(state);
    }
}
