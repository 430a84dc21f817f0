//! Live view onto one host server instance.

use crate::host::domain::HostInstanceId;
use std::sync::Arc;
use uuid::Uuid;

/// A connected player as exposed by the host runtime.
pub trait HostPlayer: Send + Sync {
    /// Returns the player's display name.
    fn name(&self) -> String;

    /// Returns the player's stable unique identifier.
    fn unique_id(&self) -> Uuid;

    /// Delivers a message through the player's chat channel.
    ///
    /// Must be safe to call from outside the host's main thread; the
    /// implementation marshals onto the host thread when required.
    fn deliver(&self, message: &str);
}

/// Live view of one host server instance.
///
/// All queries reflect a snapshot at call time; nothing is cached between
/// calls, so connected-player listings stay consistent with the host's own
/// collections.
pub trait HostServer: Send + Sync {
    /// Returns the identifier of this server instance.
    fn instance_id(&self) -> HostInstanceId;

    /// Returns the currently connected players.
    fn players(&self) -> Vec<Arc<dyn HostPlayer>>;

    /// Delivers a message through the console output channel.
    fn deliver_console(&self, message: &str);
}
