//! Environment providers

use std::collections::HashMap;
use std::ffi::OsString;

/// Source of named configuration values.
///
/// Implementations never fail and never cache: every call reflects the
/// provider's state at call time.
pub trait EnvironmentReader {
    /// Raw value of `name`, or `None` if it is unset
    fn get_os(&self, name: &str) -> Option<OsString>;

    /// Value of `name` as text. A value that is not valid Unicode reads as
    /// `None`; use [`EnvironmentReader::get_os`] for paths.
    fn get(&self, name: &str) -> Option<String> {
        self.get_os(name)?.into_string().ok()
    }

    /// Like [`EnvironmentReader::get_os`] but an empty value counts as unset
    fn get_os_non_empty(&self, name: &str) -> Option<OsString> {
        self.get_os(name).filter(|value| !value.is_empty())
    }

    /// Like [`EnvironmentReader::get`] but an empty value counts as unset
    fn get_non_empty(&self, name: &str) -> Option<String> {
        self.get(name).filter(|value| !value.is_empty())
    }
}

impl<T: EnvironmentReader + ?Sized> EnvironmentReader for &T {
    fn get_os(&self, name: &str) -> Option<OsString> {
        (**self).get_os(name)
    }
}

/// Reads the real process environment.
///
/// The process environment is shared mutable state. Callers must not modify
/// it from another thread while a resolution call is in progress; results
/// are unspecified if they do.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EnvironmentReader for ProcessEnvironment {
    fn get_os(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }
}

/// In-memory environment for injected configuration and tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnvironment {
    vars: HashMap<String, OsString>,
}

impl MapEnvironment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<OsString>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<OsString> {
        self.vars.remove(name)
    }
}

impl EnvironmentReader for MapEnvironment {
    fn get_os(&self, name: &str) -> Option<OsString> {
        self.vars.get(name).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnvironment
where
    K: Into<String>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
