//! The host adapter shim and its sender wrapper.

mod adapter;
mod sender;

pub use adapter::HostCommandAdapter;
pub use sender::HostSender;
