#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Security root resolution for secroot
//!
//! Locates the directory holding certificates, keys and governance files
//! for a security context and assembles the [`SecurityOptions`] handed to the
//! secure transport layer.
//!
//! [`SecureRootResolver`] and [`SecurityOptionsBuilder`] take their
//! environment and filesystem as injected providers. The free functions in
//! this module wire them to the real process environment and filesystem;
//! those must not run while another thread mutates the environment.

pub mod options;
pub mod root;

pub use options::SecurityOptionsBuilder;
pub use root::SecureRootResolver;

use secroot_config::ProcessEnvironment;
use secroot_errors::Error;
use secroot_platform::StdFilesystem;
use secroot_types::SecurityOptions;
use std::path::PathBuf;

/// Resolve the secure root for `context` from the process environment.
///
/// Returns `None` when no secure root can be resolved or `context` is
/// empty; the reason is logged at debug level.
#[must_use]
pub fn get_secure_root(context: &str) -> Option<PathBuf> {
    let env = ProcessEnvironment::new();
    let fs = StdFilesystem::new();
    match SecureRootResolver::new(&env, &fs).resolve_str(context) {
        Ok(root) => Some(root),
        Err(err) => {
            tracing::debug!(context, error = %err, "no secure root");
            None
        }
    }
}

/// Build security options for `context` from the process environment.
///
/// # Errors
///
/// Returns an error if `context` is empty, or if security is enabled and no
/// usable secure root could be resolved.
pub fn get_security_options_from_environment(context: &str) -> Result<SecurityOptions, Error> {
    let env = ProcessEnvironment::new();
    let fs = StdFilesystem::new();
    SecurityOptionsBuilder::new(&env, &fs).build_str(context)
}
