//! Orchestration services for command registration and dispatch.

mod dispatcher;
mod registry;

pub use dispatcher::{CommandDispatcher, DispatchOutcome};
pub use registry::{CommandModule, CommandModuleError, CommandRegistry, CommandRegistryError};
