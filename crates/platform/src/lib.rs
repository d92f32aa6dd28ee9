//! Platform abstraction layer for secure root lookup.
//!
//! This crate provides the only filesystem touches the resolver makes:
//! - Path joining that concatenates segments verbatim ([`join`])
//! - Directory existence checks behind the [`FilesystemOperations`] trait
//!
//! Permissions, symlink targets and directory contents are never inspected.

pub mod filesystem;
pub mod path;

pub use filesystem::{FilesystemOperations, StdFilesystem};
pub use path::join;
