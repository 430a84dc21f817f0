//! Error types for command domain validation.

use thiserror::Error;

/// Errors returned while constructing command domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandDomainError {
    /// An alias is empty after trimming.
    #[error("command alias must not be empty")]
    EmptyAlias,

    /// An alias contains whitespace.
    #[error("command alias '{0}' must not contain whitespace")]
    InvalidAlias(String),

    /// A command was built without any aliases.
    #[error("command must declare at least one alias")]
    MissingAliases,

    /// A command was built without an executor.
    #[error("command must declare an executor")]
    MissingExecutor,
}
