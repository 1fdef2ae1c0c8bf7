// src/lib.rs

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod scaffold;
pub mod validate;

use tracing::debug;

use crate::cli::{CliArgs, Command};
use crate::config::resolve_config;
use crate::errors::Result;
use crate::exec::{Orchestrator, RealProcessBackend};

/// High-level entry point used by `main.rs`.
///
/// Resolves the config, dispatches the subcommand and returns the exit code
/// the process should end with. Fatal errors (bad input, interpreter missing)
/// are returned as `Err`.
pub async fn run(args: CliArgs) -> Result<i32> {
    let config = resolve_config(args.config.as_deref())?;
    debug!(repo_root = %config.repo_root.display(), "config resolved");

    match &args.command {
        Command::Run(run_args) => {
            let orchestrator =
                Orchestrator::new(RealProcessBackend, config.interpreters.clone());
            commands::run::run(run_args, &config, &orchestrator).await
        }
        Command::ValidateMonitorOutput(validate_args) => {
            commands::validate::run(validate_args, &config).await
        }
        Command::Scaffold(scaffold_args) => commands::scaffold::run(scaffold_args, &config),
    }
}
