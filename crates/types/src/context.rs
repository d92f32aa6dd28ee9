//! Security context names

use secroot_errors::SecurityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::is_separator;

/// Name of the participant whose security material is being located.
///
/// Either a bare identifier (`talker`) or a slash-delimited hierarchical
/// path (`/robot/arm/talker`). The name is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SecurityContextName(String);

impl SecurityContextName {
    /// Create a context name
    ///
    /// # Errors
    ///
    /// Returns `SecurityError::InvalidArgument` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, SecurityError> {
        let name = name.into();
        if name.is_empty() {
            return Err(SecurityError::InvalidArgument {
                message: "security context name must not be empty".to_string(),
            });
        }
        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name as a path suffix relative to a root directory.
    ///
    /// Exactly one leading separator is stripped; anything after it is kept
    /// verbatim.
    #[must_use]
    pub fn relative_suffix(&self) -> &str {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) if is_separator(first) => chars.as_str(),
            _ => &self.0,
        }
    }
}

impl fmt::Display for SecurityContextName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SecurityContextName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SecurityContextName {
    type Error = SecurityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SecurityContextName {
    type Error = SecurityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SecurityContextName> for String {
    fn from(name: SecurityContextName) -> Self {
        name.0
    }
}
