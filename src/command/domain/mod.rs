//! Domain model for diagnostics commands.
//!
//! Commands are immutable definitions built once at bootstrap: a validated
//! alias set, an executor, and an optional suggestion provider. Host and
//! transport concerns remain outside this boundary.

mod alias;
mod command;
mod error;

pub use alias::CommandAlias;
pub use command::{
    Command, CommandBuilder, CommandExecutionError, CommandExecutor, SuggestionProvider,
};
pub use error::CommandDomainError;
