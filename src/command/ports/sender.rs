//! Sender abstraction: who issued a command, independent of host type.

use uuid::Uuid;

/// Capability handle for the identity that issued a command.
///
/// One adapter type per host framework implements this trait; the core never
/// inspects host types. Implementations must define equality and hashing over
/// the wrapped host object, never over the display name, and must be safe to
/// use from outside the host's main thread (the adapter marshals delivery
/// back onto the host thread when the host demands it).
pub trait CommandSender: Send + Sync {
    /// Returns the sender's display name.
    ///
    /// Never fails; adapters synthesize a fallback such as `"unknown:<kind>"`
    /// when the underlying host object exposes no name.
    fn name(&self) -> String;

    /// Returns the sender's stable unique identifier.
    ///
    /// `None` for non-identifiable senders such as the console.
    fn unique_id(&self) -> Option<Uuid>;

    /// Delivers formatted output through the host's own rendering channel.
    ///
    /// Must not panic; delivery failures are the adapter's responsibility to
    /// suppress or log.
    fn send_message(&self, message: &str);

    /// Queries the host's authorization collaborator for a permission node.
    ///
    /// Pure query with no side effects, evaluated fresh on every call.
    fn has_permission(&self, node: &str) -> bool;
}

/// Sends an operator-facing message with the platform message prefix.
pub fn send_prefixed(sender: &dyn CommandSender, prefix: &str, message: &str) {
    sender.send_message(&format!("{prefix}{message}"));
}
