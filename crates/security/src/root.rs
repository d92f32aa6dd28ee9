//! Secure root directory resolution

use secroot_config::constants::{DIRECTORY_OVERRIDE_VAR, ROOT_DIRECTORY_VAR};
use secroot_config::EnvironmentReader;
use secroot_errors::SecurityError;
use secroot_platform::{join, FilesystemOperations};
use secroot_types::SecurityContextName;
use std::path::PathBuf;
use tracing::debug;

/// Locates the directory holding security material for a context.
///
/// Lookup order:
/// 1. `ROS_SECURITY_DIRECTORY_OVERRIDE`, returned verbatim if it is an
///    existing directory. The context name is ignored, and an invalid
///    override fails without consulting the root directory.
/// 2. `ROS_SECURITY_ROOT_DIRECTORY` joined with the context name (one
///    leading separator stripped). Only that exact directory is accepted.
/// 3. Otherwise there is no secure root.
///
/// Empty variable values count as unset. The result depends only on the two
/// variables, the context name and the filesystem at call time.
pub struct SecureRootResolver<'a> {
    env: &'a dyn EnvironmentReader,
    fs: &'a dyn FilesystemOperations,
}

impl<'a> SecureRootResolver<'a> {
    pub fn new(env: &'a dyn EnvironmentReader, fs: &'a dyn FilesystemOperations) -> Self {
        Self { env, fs }
    }

    /// Resolve the secure root for `context`
    ///
    /// # Errors
    ///
    /// Returns `SecurityError::OverrideInvalid` if the override is set but is
    /// not an existing directory, and `SecurityError::RootNotFound` if the
    /// joined candidate does not exist or neither variable is set.
    pub fn resolve(&self, context: &SecurityContextName) -> Result<PathBuf, SecurityError> {
        if let Some(override_dir) = self.env.get_os_non_empty(DIRECTORY_OVERRIDE_VAR) {
            let candidate = PathBuf::from(override_dir);
            debug!(path = %candidate.display(), "checking security directory override");
            if self.fs.exists_as_directory(&candidate) {
                return Ok(candidate);
            }
            return Err(SecurityError::OverrideInvalid {
                path: candidate.display().to_string(),
            });
        }

        let Some(root) = self.env.get_os_non_empty(ROOT_DIRECTORY_VAR) else {
            return Err(SecurityError::RootNotFound {
                context: context.to_string(),
                root: None,
            });
        };

        let root = PathBuf::from(root);
        let candidate = join(&root, context.relative_suffix());
        debug!(path = %candidate.display(), context = %context, "checking security root candidate");
        if self.fs.exists_as_directory(&candidate) {
            Ok(candidate)
        } else {
            Err(SecurityError::RootNotFound {
                context: context.to_string(),
                root: Some(root.display().to_string()),
            })
        }
    }

    /// Validate `context` and resolve it
    ///
    /// # Errors
    ///
    /// Returns `SecurityError::InvalidArgument` for an empty name, otherwise
    /// the same errors as [`SecureRootResolver::resolve`].
    pub fn resolve_str(&self, context: &str) -> Result<PathBuf, SecurityError> {
        let context = SecurityContextName::new(context)?;
        self.resolve(&context)
    }
}
