//! Command dispatcher: alias resolution, async execution, tab completion.

use super::CommandRegistry;
use crate::command::ports::{CommandSender, send_prefixed};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Message sent when the first token resolves to no registered command.
pub const UNKNOWN_COMMAND_MESSAGE: &str = "Unknown command.";

/// Message sent when the sender lacks the platform permission node.
pub const PERMISSION_DENIED_MESSAGE: &str =
    "You do not have permission to use this command.";

/// Message sent when an executor fails unexpectedly.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "An unexpected error occurred while executing the command.";

/// Outcome of a dispatch attempt.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// The sender lacked the required permission; a denial was sent.
    Denied,
    /// No command matched the first token; an unknown-command message was
    /// sent.
    Unknown,
    /// The executor was spawned onto the runtime.
    ///
    /// The handle completes once the executor and its failure reporting have
    /// finished; callers that do not need to observe completion simply drop
    /// it.
    Dispatched(JoinHandle<()>),
}

/// Resolves invocations against the registry and runs executors off the
/// invocation thread.
///
/// The invocation path typically originates on a latency-sensitive host
/// thread, so resolution and messaging are the only work done inline;
/// executors always run as spawned tasks. Must be called from within a tokio
/// runtime.
#[derive(Clone)]
pub struct CommandDispatcher {
    registry: Arc<CommandRegistry>,
    permission_node: String,
    message_prefix: String,
}

impl CommandDispatcher {
    /// Creates a dispatcher over a frozen registry.
    pub fn new(
        registry: Arc<CommandRegistry>,
        permission_node: impl Into<String>,
        message_prefix: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            permission_node: permission_node.into(),
            message_prefix: message_prefix.into(),
        }
    }

    /// Executes the command named by the first argument token.
    ///
    /// Unresolved aliases produce exactly one unknown-command message and no
    /// executor side effects. Resolved commands are spawned; executor errors
    /// and panics are caught at the task boundary, logged, and reported to
    /// the sender as a single generic failure message.
    #[must_use]
    pub fn execute(&self, sender: Arc<dyn CommandSender>, args: Vec<String>) -> DispatchOutcome {
        if !sender.has_permission(&self.permission_node) {
            send_prefixed(&*sender, &self.message_prefix, PERMISSION_DENIED_MESSAGE);
            return DispatchOutcome::Denied;
        }

        let Some((alias, rest)) = args.split_first() else {
            send_prefixed(&*sender, &self.message_prefix, UNKNOWN_COMMAND_MESSAGE);
            return DispatchOutcome::Unknown;
        };
        let Some(command) = self.registry.resolve(alias) else {
            send_prefixed(&*sender, &self.message_prefix, UNKNOWN_COMMAND_MESSAGE);
            return DispatchOutcome::Unknown;
        };

        let executor = command.executor();
        let executor_args = rest.to_vec();
        let executor_sender = Arc::clone(&sender);
        let task = tokio::spawn(async move { executor.run(executor_sender, &executor_args).await });

        let prefix = self.message_prefix.clone();
        let supervisor = tokio::spawn(async move {
            match task.await {
                Ok(Ok(())) => {}
                Ok(Err(error)) => {
                    tracing::error!(error = %error, "command executor failed");
                    send_prefixed(&*sender, &prefix, GENERIC_FAILURE_MESSAGE);
                }
                Err(join_error) => {
                    tracing::error!(error = %join_error, "command executor task aborted");
                    send_prefixed(&*sender, &prefix, GENERIC_FAILURE_MESSAGE);
                }
            }
        });
        DispatchOutcome::Dispatched(supervisor)
    }

    /// Resolves tab-completion candidates for the final argument token.
    ///
    /// Completing the first token lists registered aliases matching the
    /// partial input. Otherwise the resolved command's suggestion provider is
    /// evaluated; commands without a provider yield no candidates. Evaluation
    /// has no side effects and is cancelled by dropping the returned future.
    pub async fn tab_complete(&self, sender: Arc<dyn CommandSender>, args: &[String]) -> Vec<String> {
        if !sender.has_permission(&self.permission_node) {
            return Vec::new();
        }

        if args.len() <= 1 {
            let partial = args.first().map_or("", String::as_str);
            return self
                .registry
                .aliases()
                .into_iter()
                .filter(|alias| alias.starts_with(partial))
                .collect();
        }

        let Some((alias, rest)) = args.split_first() else {
            return Vec::new();
        };
        let Some(command) = self.registry.resolve(alias) else {
            return Vec::new();
        };
        match command.suggestions() {
            Some(provider) => provider.suggest(sender, rest).await,
            None => Vec::new(),
        }
    }
}
