//! Adapter shim translating host invocation events into dispatcher calls.

use super::HostSender;
use crate::command::ports::CommandSender;
use crate::command::services::CommandDispatcher;
use crate::host::domain::{HostInvocation, InvocationSource};
use crate::host::ports::{HostPlayer, HostServer, PermissionLookup};
use std::sync::Arc;

/// Thin shim binding one host server instance to the command dispatcher.
///
/// The adapter answers only for its own instance: events tagged with another
/// instance are silently ignored so that, when several instances share a
/// process, exactly one adapter handles each event.
#[derive(Clone)]
pub struct HostCommandAdapter {
    server: Arc<dyn HostServer>,
    permissions: Arc<dyn PermissionLookup>,
    dispatcher: Arc<CommandDispatcher>,
    command_prefix: String,
}

impl HostCommandAdapter {
    /// Creates an adapter bound to one host server instance.
    pub fn new(
        server: Arc<dyn HostServer>,
        permissions: Arc<dyn PermissionLookup>,
        dispatcher: Arc<CommandDispatcher>,
        command_prefix: impl Into<String>,
    ) -> Self {
        Self {
            server,
            permissions,
            dispatcher,
            command_prefix: command_prefix.into(),
        }
    }

    /// Parses raw command-line input into an argument vector.
    ///
    /// Returns `None` unless the first whitespace-separated token equals the
    /// platform command prefix; the remaining tokens form the argument
    /// vector.
    #[must_use]
    pub fn parse_input(&self, raw: &str) -> Option<Vec<String>> {
        let mut tokens = raw.split_whitespace();
        if tokens.next() != Some(self.command_prefix.as_str()) {
            return None;
        }
        Some(tokens.map(ToOwned::to_owned).collect())
    }

    /// Handles one raw invocation event.
    ///
    /// Events tagged with another host instance, or not addressed to the
    /// platform prefix, are silent no-ops: no message, no dispatch.
    pub fn handle_invocation(&self, invocation: &HostInvocation) {
        if invocation.instance() != self.server.instance_id() {
            tracing::trace!(
                instance = %invocation.instance(),
                "ignoring invocation for another host instance"
            );
            return;
        }
        let Some(args) = self.parse_input(invocation.input()) else {
            return;
        };
        let sender: Arc<dyn CommandSender> = Arc::new(self.wrap_source(invocation.source()));
        let _outcome = self.dispatcher.execute(sender, args);
    }

    /// Resolves tab-completion candidates for one raw invocation event.
    ///
    /// Gated exactly like [`Self::handle_invocation`]; gated-out events
    /// yield an empty candidate list. Evaluation has no side effects and is
    /// cancelled by dropping the returned future.
    pub async fn suggest(&self, invocation: &HostInvocation) -> Vec<String> {
        if invocation.instance() != self.server.instance_id() {
            return Vec::new();
        }
        let Some(args) = self.parse_input(invocation.input()) else {
            return Vec::new();
        };
        let sender: Arc<dyn CommandSender> = Arc::new(self.wrap_source(invocation.source()));
        self.dispatcher.tab_complete(sender, &args).await
    }

    /// Enumerates senders currently holding a permission node.
    ///
    /// Reflects a live snapshot of the host's connected players at call
    /// time, filtered through the permission collaborator, plus the console
    /// sender when the console itself holds the node. Used for
    /// broadcast-style notifications.
    #[must_use]
    pub fn senders_with_permission(&self, node: &str) -> Vec<Arc<HostSender>> {
        let instance = self.server.instance_id();
        let mut senders: Vec<Arc<HostSender>> = self
            .server
            .players()
            .into_iter()
            .map(|player| {
                HostSender::player(instance, player, Arc::clone(&self.permissions))
            })
            .filter(|sender| sender.has_permission(node))
            .map(Arc::new)
            .collect();

        let console = HostSender::console(
            Arc::clone(&self.server),
            Arc::clone(&self.permissions),
        );
        if console.has_permission(node) {
            senders.push(Arc::new(console));
        }
        senders
    }

    fn wrap_source(&self, source: &InvocationSource) -> HostSender {
        let instance = self.server.instance_id();
        match source {
            InvocationSource::Console => HostSender::console(
                Arc::clone(&self.server),
                Arc::clone(&self.permissions),
            ),
            InvocationSource::Player(player) => HostSender::player(
                instance,
                Arc::<dyn HostPlayer>::clone(player),
                Arc::clone(&self.permissions),
            ),
            InvocationSource::Other { kind } => HostSender::unaddressable(
                instance,
                kind.clone(),
                Arc::clone(&self.permissions),
            ),
        }
    }
}
