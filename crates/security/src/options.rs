//! Security options assembly

use crate::root::SecureRootResolver;
use secroot_config::constants::{ENABLE_TRUE, ENABLE_VAR, STRATEGY_VAR};
use secroot_config::EnvironmentReader;
use secroot_errors::{Error, SecurityError};
use secroot_platform::FilesystemOperations;
use secroot_types::{EnforcementPolicy, SecurityContextName, SecurityOptions};
use tracing::{info, warn};

/// Builds [`SecurityOptions`] from the security environment variables.
pub struct SecurityOptionsBuilder<'a> {
    env: &'a dyn EnvironmentReader,
    fs: &'a dyn FilesystemOperations,
}

impl<'a> SecurityOptionsBuilder<'a> {
    pub fn new(env: &'a dyn EnvironmentReader, fs: &'a dyn FilesystemOperations) -> Self {
        Self { env, fs }
    }

    /// Whether `ROS_SECURITY_ENABLE` is exactly `"true"`
    #[must_use]
    pub fn security_enabled(&self) -> bool {
        self.env.get(ENABLE_VAR).as_deref() == Some(ENABLE_TRUE)
    }

    /// Enforcement policy for an enabled participant.
    ///
    /// Enforce is the only level defined while security is enabled; an unset
    /// or unrecognized strategy is reported and still enforced.
    fn enforcement_policy(&self) -> EnforcementPolicy {
        let strategy = self.env.get(STRATEGY_VAR);
        match strategy.as_deref().and_then(EnforcementPolicy::from_strategy) {
            Some(policy) => policy,
            None => {
                warn!(
                    strategy = ?strategy,
                    "unrecognized {STRATEGY_VAR}, enforcing security anyway"
                );
                EnforcementPolicy::Enforce
            }
        }
    }

    /// Build options for `context`
    ///
    /// When security is disabled the result is always permissive and nothing
    /// else is read.
    ///
    /// # Errors
    ///
    /// Returns `SecurityError::NoUsableRoot` if security is enabled but no
    /// secure root can be resolved for `context`.
    pub fn build(&self, context: &SecurityContextName) -> Result<SecurityOptions, Error> {
        if !self.security_enabled() {
            return Ok(SecurityOptions::permissive());
        }

        let policy = self.enforcement_policy();

        let root = SecureRootResolver::new(self.env, self.fs)
            .resolve(context)
            .map_err(|err| SecurityError::NoUsableRoot {
                context: context.to_string(),
                reason: err.to_string(),
            })?;

        info!(
            path = %root.display(),
            context = %context,
            policy = %policy,
            "found security directory"
        );
        Ok(SecurityOptions::enforced(root))
    }

    /// Validate `context` and build options for it
    ///
    /// # Errors
    ///
    /// Returns `SecurityError::InvalidArgument` for an empty name, otherwise
    /// the same errors as [`SecurityOptionsBuilder::build`].
    pub fn build_str(&self, context: &str) -> Result<SecurityOptions, Error> {
        let context = SecurityContextName::new(context)?;
        self.build(&context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secroot_config::constants::{DIRECTORY_OVERRIDE_VAR, ROOT_DIRECTORY_VAR};
    use secroot_config::MapEnvironment;
    use std::path::{Path, PathBuf};

    struct Dirs(Vec<PathBuf>);

    impl FilesystemOperations for Dirs {
        fn exists_as_directory(&self, path: &Path) -> bool {
            self.0.iter().any(|dir| dir == path)
        }
    }

    struct PanicFs;

    impl FilesystemOperations for PanicFs {
        fn exists_as_directory(&self, path: &Path) -> bool {
            panic!("unexpected filesystem access: {}", path.display());
        }
    }

    fn context(name: &str) -> SecurityContextName {
        SecurityContextName::new(name).unwrap()
    }

    #[test]
    fn test_disabled_never_touches_filesystem() {
        let env = MapEnvironment::new()
            .with(ENABLE_VAR, "false")
            .with(DIRECTORY_OVERRIDE_VAR, "/missing");
        let builder = SecurityOptionsBuilder::new(&env, &PanicFs);

        let options = builder.build(&context("talker")).unwrap();
        assert_eq!(options, SecurityOptions::permissive());
    }

    #[test]
    fn test_unset_enable_is_disabled() {
        let env = MapEnvironment::new().with(ROOT_DIRECTORY_VAR, "/keys");
        let builder = SecurityOptionsBuilder::new(&env, &PanicFs);
        assert!(!builder.security_enabled());
        assert_eq!(
            builder.build(&context("talker")).unwrap(),
            SecurityOptions::permissive()
        );
    }

    #[test]
    fn test_enabled_without_strategy_still_enforces() {
        let env = MapEnvironment::new()
            .with(ENABLE_VAR, "true")
            .with(ROOT_DIRECTORY_VAR, "/keys");
        let fs = Dirs(vec![PathBuf::from("/keys/talker")]);
        let builder = SecurityOptionsBuilder::new(&env, &fs);

        let options = builder.build(&context("/talker")).unwrap();
        assert_eq!(options, SecurityOptions::enforced("/keys/talker"));
    }

    #[test]
    fn test_enabled_without_root_fails() {
        let env = MapEnvironment::new()
            .with(ENABLE_VAR, "true")
            .with(STRATEGY_VAR, "Enforce");
        let fs = Dirs(Vec::new());
        let builder = SecurityOptionsBuilder::new(&env, &fs);

        let err = builder.build(&context("talker")).unwrap_err();
        assert!(matches!(
            err,
            Error::Security(SecurityError::NoUsableRoot { .. })
        ));
    }

    #[test]
    fn test_build_str_rejects_empty_name_even_when_disabled() {
        let env = MapEnvironment::new();
        let builder = SecurityOptionsBuilder::new(&env, &PanicFs);
        let err = builder.build_str("").unwrap_err();
        assert!(matches!(
            err,
            Error::Security(SecurityError::InvalidArgument { .. })
        ));
    }
}
