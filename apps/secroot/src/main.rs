//! secroot - secure root resolution diagnostics
//!
//! Resolves security directories and options the same way a participant
//! does at startup, using the process environment.

mod cli;
mod display;
mod error;

use crate::cli::{Cli, Commands};
use crate::display::OutputRenderer;
use crate::error::CliError;
use clap::Parser;
use secroot_config::{ProcessEnvironment, SecurityEnv};
use secroot_platform::StdFilesystem;
use secroot_security::{SecureRootResolver, SecurityOptionsBuilder};
use std::process;
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.global.json;

    init_tracing(json_mode, cli.global.debug);

    if let Err(e) = run(cli) {
        error!("Application error: {}", e);
        if !json_mode {
            eprintln!("Error: {e}");
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    debug!("Starting secroot v{}", env!("CARGO_PKG_VERSION"));

    let env = ProcessEnvironment::new();
    let fs = StdFilesystem::new();
    let renderer = OutputRenderer::new(cli.global.json);

    match cli.command {
        Commands::Root { context } => {
            let root = SecureRootResolver::new(&env, &fs).resolve_str(&context)?;
            renderer.render_root(&context, &root)
        }
        Commands::Options { context } => {
            let options = SecurityOptionsBuilder::new(&env, &fs).build_str(&context)?;
            renderer.render_options(&options)
        }
        Commands::Env => renderer.render_env(&SecurityEnv::capture(&env)),
    }
}

/// Initialize tracing/logging
fn init_tracing(json_mode: bool, debug_enabled: bool) {
    let default_filter = if debug_enabled {
        "debug,secroot=debug"
    } else {
        "warn,secroot=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    if json_mode {
        tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
    }
}
