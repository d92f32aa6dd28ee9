//! Command line interface definition

use clap::{Parser, Subcommand};

/// secroot - locate security material for secure transport participants
#[derive(Parser)]
#[command(name = "secroot")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Locate security material for secure transport participants")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Parser)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging to stderr
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the secure root directory for a security context
    Root {
        /// Security context name, e.g. /robot/talker
        context: String,
    },

    /// Print the security options a participant would start with
    Options {
        /// Security context name, e.g. /robot/talker
        context: String,
    },

    /// Show the security environment variables
    Env,
}
