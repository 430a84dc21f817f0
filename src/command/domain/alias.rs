//! Validated alias newtype for command lookup.

use super::CommandDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated command alias.
///
/// Aliases are matched case-sensitively and exactly; they carry no prefix or
/// fuzzy matching semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandAlias(String);

impl CommandAlias {
    /// Creates a validated command alias.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDomainError::EmptyAlias`] when the alias is empty
    /// after trimming, or [`CommandDomainError::InvalidAlias`] when it
    /// contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, CommandDomainError> {
        let token = value.into();
        if token.trim().is_empty() {
            return Err(CommandDomainError::EmptyAlias);
        }
        if token.chars().any(char::is_whitespace) {
            return Err(CommandDomainError::InvalidAlias(token));
        }
        Ok(Self(token))
    }

    /// Returns the alias as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CommandAlias {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandAlias {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
