//! Raw command invocation events received from a host framework.

use super::HostInstanceId;
use crate::host::ports::HostPlayer;
use std::sync::Arc;

/// The host object a command invocation originated from.
#[derive(Clone)]
pub enum InvocationSource {
    /// The host console.
    Console,
    /// A connected player.
    Player(Arc<dyn HostPlayer>),
    /// A sender type the adapter does not recognise.
    ///
    /// `kind` is a short host-side type tag used to synthesize a display
    /// name; messages to such senders are suppressed.
    Other {
        /// Host-side type tag.
        kind: String,
    },
}

/// One raw command event as handed over by the host framework.
///
/// Created per invocation by host glue code and consumed immediately; never
/// persisted.
#[derive(Clone)]
pub struct HostInvocation {
    instance: HostInstanceId,
    source: InvocationSource,
    input: String,
}

impl HostInvocation {
    /// Creates an invocation event.
    pub fn new(
        instance: HostInstanceId,
        source: InvocationSource,
        input: impl Into<String>,
    ) -> Self {
        Self {
            instance,
            source,
            input: input.into(),
        }
    }

    /// Returns the host instance the event is tagged with.
    #[must_use]
    pub const fn instance(&self) -> HostInstanceId {
        self.instance
    }

    /// Returns the originating host object.
    #[must_use]
    pub const fn source(&self) -> &InvocationSource {
        &self.source
    }

    /// Returns the raw command-line input, prefix token included.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}
