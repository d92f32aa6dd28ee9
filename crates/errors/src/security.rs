//! Secure root resolution error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SecurityError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("security directory override {path} does not exist or is not a directory")]
    OverrideInvalid { path: String },

    #[error("no security directory matching '{context}' found in {}", .root.as_deref().unwrap_or("<unset>"))]
    RootNotFound {
        context: String,
        root: Option<String>,
    },

    #[error("no usable security root could be resolved for '{context}': {reason}")]
    NoUsableRoot { context: String, reason: String },
}

impl UserFacingError for SecurityError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { .. } => Some("Pass a non-empty security context name."),
            Self::OverrideInvalid { .. } => Some(
                "Point ROS_SECURITY_DIRECTORY_OVERRIDE at an existing directory or unset it.",
            ),
            Self::RootNotFound { root: None, .. } => Some(
                "Set ROS_SECURITY_ROOT_DIRECTORY or ROS_SECURITY_DIRECTORY_OVERRIDE.",
            ),
            Self::RootNotFound { .. } | Self::NoUsableRoot { .. } => Some(
                "Create the security directory for this context under ROS_SECURITY_ROOT_DIRECTORY.",
            ),
        }
    }

    fn is_retryable(&self) -> bool {
        false
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::InvalidArgument { .. } => "security.invalid_argument",
            Self::OverrideInvalid { .. } => "security.override_invalid",
            Self::RootNotFound { .. } => "security.root_not_found",
            Self::NoUsableRoot { .. } => "security.no_usable_root",
        };
        Some(code)
    }
}
