//! Port contracts for command dispatch.

mod sender;

pub use sender::{CommandSender, send_prefixed};
