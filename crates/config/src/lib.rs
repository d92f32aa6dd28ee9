#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration sources for secroot
//!
//! Security configuration comes exclusively from four environment
//! variables (see [`constants`]). They are read through the
//! [`EnvironmentReader`] trait so that resolution can run against the real
//! process environment or an injected map.

pub mod constants;
pub mod environment;

pub use environment::{EnvironmentReader, MapEnvironment, ProcessEnvironment};

use serde::Serialize;

/// Snapshot of the security variables at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SecurityEnv {
    pub enable: Option<String>,
    pub strategy: Option<String>,
    pub directory_override: Option<String>,
    pub root_directory: Option<String>,
}

impl SecurityEnv {
    /// Read all four variables from `env`. Empty values are recorded as
    /// unset; values that are not valid Unicode are converted lossily.
    pub fn capture(env: &dyn EnvironmentReader) -> Self {
        let lossy = |name: &str| {
            env.get_os_non_empty(name)
                .map(|value| value.to_string_lossy().into_owned())
        };
        Self {
            enable: lossy(constants::ENABLE_VAR),
            strategy: lossy(constants::STRATEGY_VAR),
            directory_override: lossy(constants::DIRECTORY_OVERRIDE_VAR),
            root_directory: lossy(constants::ROOT_DIRECTORY_VAR),
        }
    }

    /// Whether the enable variable turns security on
    #[must_use]
    pub fn security_enabled(&self) -> bool {
        self.enable.as_deref() == Some(constants::ENABLE_TRUE)
    }

    /// `(name, value)` pairs in [`constants::ALL_VARS`] order
    #[must_use]
    pub fn entries(&self) -> [(&'static str, Option<&str>); 4] {
        [
            (constants::ENABLE_VAR, self.enable.as_deref()),
            (constants::STRATEGY_VAR, self.strategy.as_deref()),
            (
                constants::DIRECTORY_OVERRIDE_VAR,
                self.directory_override.as_deref(),
            ),
            (constants::ROOT_DIRECTORY_VAR, self.root_directory.as_deref()),
        ]
    }
}
