//! Immutable command definitions and their builder.

use super::{CommandAlias, CommandDomainError};
use crate::command::ports::CommandSender;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Opaque failure raised by a command executor.
///
/// Expected operational failures (a capture that fails, an upload that times
/// out) are reported to the sender by the executor itself; this error carries
/// only unexpected internal failures, which the dispatcher logs and surfaces
/// as a generic message.
#[derive(Debug, Clone, Error)]
#[error("command execution failed: {0}")]
pub struct CommandExecutionError(Arc<dyn std::error::Error + Send + Sync>);

impl CommandExecutionError {
    /// Wraps an internal executor failure.
    pub fn new(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(error))
    }
}

/// Executable body of a command.
///
/// Executors run on the async runtime, never inline on the invocation
/// thread, so they are free to perform capture, compression, and network
/// work.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Runs the command for the given sender and argument vector.
    ///
    /// The argument vector excludes the resolved alias token.
    ///
    /// # Errors
    ///
    /// Returns [`CommandExecutionError`] for unexpected internal failures;
    /// the dispatcher reports these as a generic failure message.
    async fn run(
        &self,
        sender: Arc<dyn CommandSender>,
        args: &[String],
    ) -> Result<(), CommandExecutionError>;
}

/// Tab-completion candidates for a command's final argument token.
///
/// Evaluation must be free of side effects; callers cancel an in-flight
/// evaluation by dropping the future.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Returns completion candidates for the final argument token.
    async fn suggest(&self, sender: Arc<dyn CommandSender>, args: &[String]) -> Vec<String>;
}

/// Immutable command definition.
///
/// Built once via [`CommandBuilder`] and registered at bootstrap; never
/// mutated afterwards.
#[derive(Clone)]
pub struct Command {
    aliases: Vec<CommandAlias>,
    executor: Arc<dyn CommandExecutor>,
    suggestions: Option<Arc<dyn SuggestionProvider>>,
}

impl Command {
    /// Starts building a command definition.
    #[must_use]
    pub fn builder() -> CommandBuilder {
        CommandBuilder::default()
    }

    /// Returns the alias set, in declaration order.
    #[must_use]
    pub fn aliases(&self) -> &[CommandAlias] {
        &self.aliases
    }

    /// Returns a handle to the executor.
    #[must_use]
    pub fn executor(&self) -> Arc<dyn CommandExecutor> {
        Arc::clone(&self.executor)
    }

    /// Returns the suggestion provider, when one is declared.
    #[must_use]
    pub fn suggestions(&self) -> Option<Arc<dyn SuggestionProvider>> {
        self.suggestions.as_ref().map(Arc::clone)
    }
}

/// Builder accumulating command fields, validated at [`CommandBuilder::build`].
#[derive(Default)]
pub struct CommandBuilder {
    aliases: Vec<String>,
    executor: Option<Arc<dyn CommandExecutor>>,
    suggestions: Option<Arc<dyn SuggestionProvider>>,
}

impl CommandBuilder {
    /// Adds alias tokens for the command.
    #[must_use]
    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Sets the command executor.
    #[must_use]
    pub fn executor(mut self, executor: Arc<dyn CommandExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Sets the suggestion provider.
    #[must_use]
    pub fn suggestions(mut self, provider: Arc<dyn SuggestionProvider>) -> Self {
        self.suggestions = Some(provider);
        self
    }

    /// Validates the accumulated fields and produces an immutable command.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDomainError::MissingAliases`] when no alias was
    /// declared, [`CommandDomainError::MissingExecutor`] when no executor was
    /// declared, or an alias validation error.
    pub fn build(self) -> Result<Command, CommandDomainError> {
        if self.aliases.is_empty() {
            return Err(CommandDomainError::MissingAliases);
        }
        let aliases = self
            .aliases
            .into_iter()
            .map(CommandAlias::new)
            .collect::<Result<Vec<_>, _>>()?;
        let executor = self.executor.ok_or(CommandDomainError::MissingExecutor)?;
        Ok(Command {
            aliases,
            executor,
            suggestions: self.suggestions,
        })
    }
}
