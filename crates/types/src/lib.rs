#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Core type definitions for secroot
//!
//! This crate provides the data model shared by the resolution crates:
//! security context names, enforcement policies and the security options
//! handed to the transport layer.

pub mod context;
pub mod options;

pub use context::SecurityContextName;
pub use options::{EnforcementPolicy, SecurityOptions};
