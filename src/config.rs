//! Platform configuration for the embedded diagnostics layer.
//!
//! Host processes hand the embedding a small configuration blob at bootstrap.
//! Every field has a default so a host can supply only the values it wants to
//! override.

use serde::Deserialize;
use thiserror::Error;

/// Default command prefix token recognised by host adapters.
pub const DEFAULT_COMMAND_PREFIX: &str = "/manometer";

/// Default permission node gating command use.
pub const DEFAULT_PERMISSION_NODE: &str = "manometer.use";

/// Default base URL composed with publish keys into shareable viewer links.
pub const DEFAULT_VIEWER_BASE_URL: &str = "https://view.manometer.dev/#";

/// Default prefix prepended to operator-facing messages.
pub const DEFAULT_MESSAGE_PREFIX: &str = "[manometer] ";

/// Errors returned while loading diagnostics configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration payload is not valid JSON for [`DiagnosticsConfig`].
    #[error("failed to parse diagnostics configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration for one diagnostics platform embedding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Command prefix token, including the leading slash (e.g. `/manometer`).
    pub command_prefix: String,
    /// Permission node a sender must hold to use diagnostics commands.
    pub permission_node: String,
    /// Base URL composed with publish keys into viewer links.
    pub viewer_base_url: String,
    /// Prefix prepended to operator-facing messages.
    pub message_prefix: String,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            command_prefix: DEFAULT_COMMAND_PREFIX.to_owned(),
            permission_node: DEFAULT_PERMISSION_NODE.to_owned(),
            viewer_base_url: DEFAULT_VIEWER_BASE_URL.to_owned(),
            message_prefix: DEFAULT_MESSAGE_PREFIX.to_owned(),
        }
    }
}

impl DiagnosticsConfig {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is not valid JSON or
    /// a field has the wrong type.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }
}
