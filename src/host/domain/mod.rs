//! Domain model for host invocation events and identity.

mod identity;
mod invocation;

pub use identity::{HostIdentity, HostInstanceId};
pub use invocation::{HostInvocation, InvocationSource};
