//! Environment variable names read by secroot
//!
//! The names are part of the external contract with the transport layer and
//! its launch tooling; values are compared case-sensitively.

/// Base directory under which security context names are joined.
pub const ROOT_DIRECTORY_VAR: &str = "ROS_SECURITY_ROOT_DIRECTORY";

/// Directory returned unconditionally when it exists.
pub const DIRECTORY_OVERRIDE_VAR: &str = "ROS_SECURITY_DIRECTORY_OVERRIDE";

/// Enforcement strategy. `Enforce` is the only recognized value.
pub const STRATEGY_VAR: &str = "ROS_SECURITY_STRATEGY";

/// Gates whether resolution is attempted at all.
pub const ENABLE_VAR: &str = "ROS_SECURITY_ENABLE";

/// Value of [`ENABLE_VAR`] that turns security on.
pub const ENABLE_TRUE: &str = "true";

/// All variables, in the order diagnostics print them.
pub const ALL_VARS: [&str; 4] = [
    ENABLE_VAR,
    STRATEGY_VAR,
    DIRECTORY_OVERRIDE_VAR,
    ROOT_DIRECTORY_VAR,
];
