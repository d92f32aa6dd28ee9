//! Security options handed to the secure transport layer

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Whether missing security material is tolerated or fatal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EnforcementPolicy {
    /// Security material is not required
    #[default]
    Permissive,
    /// A resolved security root is mandatory
    Enforce,
}

impl EnforcementPolicy {
    /// Strategy value selecting [`EnforcementPolicy::Enforce`].
    pub const ENFORCE_STRATEGY: &'static str = "Enforce";

    /// Parse a strategy variable value.
    ///
    /// Only the exact value `Enforce` is recognized; `None` is returned for
    /// anything else.
    #[must_use]
    pub fn from_strategy(value: &str) -> Option<Self> {
        (value == Self::ENFORCE_STRATEGY).then_some(Self::Enforce)
    }
}

impl fmt::Display for EnforcementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permissive => write!(f, "Permissive"),
            Self::Enforce => write!(f, "Enforce"),
        }
    }
}

/// Security policy descriptor for one participant.
///
/// `enforce` is `Permissive` exactly when `root_path` is absent. The fields
/// are private so that the two constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct SecurityOptions {
    enforce: EnforcementPolicy,
    root_path: Option<PathBuf>,
}

impl SecurityOptions {
    /// Options for a participant running without security material
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            enforce: EnforcementPolicy::Permissive,
            root_path: None,
        }
    }

    /// Options enforcing security with the given resolved root directory
    #[must_use]
    pub fn enforced(root_path: impl Into<PathBuf>) -> Self {
        Self {
            enforce: EnforcementPolicy::Enforce,
            root_path: Some(root_path.into()),
        }
    }

    #[must_use]
    pub fn enforce(&self) -> EnforcementPolicy {
        self.enforce
    }

    #[must_use]
    pub fn root_path(&self) -> Option<&Path> {
        self.root_path.as_deref()
    }

    #[must_use]
    pub fn is_enforced(&self) -> bool {
        self.enforce == EnforcementPolicy::Enforce
    }

    /// Take ownership of the resolved root path
    #[must_use]
    pub fn into_root_path(self) -> Option<PathBuf> {
        self.root_path
    }
}

impl<'de> Deserialize<'de> for SecurityOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            enforce: EnforcementPolicy,
            root_path: Option<PathBuf>,
        }

        let raw = Raw::deserialize(deserializer)?;
        match (raw.enforce, raw.root_path) {
            (EnforcementPolicy::Permissive, None) => Ok(Self::permissive()),
            (EnforcementPolicy::Enforce, Some(root)) => Ok(Self::enforced(root)),
            (EnforcementPolicy::Permissive, Some(_)) => Err(serde::de::Error::custom(
                "permissive security options must not carry a root path",
            )),
            (EnforcementPolicy::Enforce, None) => Err(serde::de::Error::custom(
                "enforced security options require a root path",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_parsing_is_case_sensitive() {
        assert_eq!(
            EnforcementPolicy::from_strategy("Enforce"),
            Some(EnforcementPolicy::Enforce)
        );
        assert_eq!(EnforcementPolicy::from_strategy("enforce"), None);
        assert_eq!(EnforcementPolicy::from_strategy("Permissive"), None);
        assert_eq!(EnforcementPolicy::from_strategy(""), None);
    }

    #[test]
    fn test_constructors_keep_invariant() {
        let options = SecurityOptions::permissive();
        assert_eq!(options.enforce(), EnforcementPolicy::Permissive);
        assert!(options.root_path().is_none());
        assert_eq!(options, SecurityOptions::default());

        let options = SecurityOptions::enforced("/keys/talker");
        assert!(options.is_enforced());
        assert_eq!(options.root_path(), Some(Path::new("/keys/talker")));
    }
}
