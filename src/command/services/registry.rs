//! In-memory command registry built once at platform bootstrap.

use crate::command::domain::{Command, CommandDomainError};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned while registering commands.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandRegistryError {
    /// An alias is already mapped to a registered command.
    #[error("command alias '{0}' is already registered")]
    DuplicateAlias(String),
}

/// Errors returned while a command module registers its commands.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandModuleError {
    /// Building a command definition failed.
    #[error(transparent)]
    Domain(#[from] CommandDomainError),
    /// The registry rejected a registration.
    #[error(transparent)]
    Registry(#[from] CommandRegistryError),
}

/// Group of related commands registered in bulk at bootstrap.
///
/// The module boundary is purely organizational; it carries no runtime
/// behaviour of its own.
pub trait CommandModule {
    /// Registers the module's commands against the registry.
    ///
    /// # Errors
    ///
    /// Returns [`CommandModuleError`] when a command fails to build or an
    /// alias collides with an existing registration. A failure is fatal to
    /// this module's startup only.
    fn register_commands(&self, registry: &mut CommandRegistry) -> Result<(), CommandModuleError>;
}

/// Mapping from alias to command definition.
///
/// Built during bootstrap, then frozen behind an `Arc` and read concurrently;
/// there is no write path after registration.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Arc<Command>>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command under every one of its aliases.
    ///
    /// Registration is all-or-nothing: when any alias collides, no alias of
    /// the command is inserted.
    ///
    /// # Errors
    ///
    /// Returns [`CommandRegistryError::DuplicateAlias`] when an alias is
    /// already mapped, including a duplicate within the command itself.
    pub fn register(&mut self, command: Command) -> Result<(), CommandRegistryError> {
        let mut pending: Vec<&str> = Vec::with_capacity(command.aliases().len());
        for alias in command.aliases() {
            if self.commands.contains_key(alias.as_str()) || pending.contains(&alias.as_str()) {
                return Err(CommandRegistryError::DuplicateAlias(
                    alias.as_str().to_owned(),
                ));
            }
            pending.push(alias.as_str());
        }

        let shared = Arc::new(command);
        for alias in shared.aliases() {
            self.commands
                .insert(alias.as_str().to_owned(), Arc::clone(&shared));
        }
        Ok(())
    }

    /// Resolves an alias to its command by case-sensitive exact match.
    #[must_use]
    pub fn resolve(&self, alias: &str) -> Option<Arc<Command>> {
        self.commands.get(alias).map(Arc::clone)
    }

    /// Returns every registered alias, sorted.
    #[must_use]
    pub fn aliases(&self) -> Vec<String> {
        let mut aliases: Vec<String> = self.commands.keys().cloned().collect();
        aliases.sort();
        aliases
    }
}
