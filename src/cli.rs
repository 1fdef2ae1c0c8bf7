// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::exec::EXIT_ERROR;
use crate::scaffold::{Category, TargetOs};

/// Command-line arguments for `rmmkit`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "rmmkit",
    version,
    about = "Run RMM components locally and validate monitor output.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Rmm.toml` in the current directory, if it exists.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `RMMKIT_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run a component locally and capture stdout/stderr.
    Run(RunArgs),

    /// Validate monitor output markers and the result line.
    ValidateMonitorOutput(ValidateArgs),

    /// Scaffold a new component file from templates.
    Scaffold(ScaffoldArgs),
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Path to a .ps1 or .sh script (relative to the repo root, or absolute).
    #[arg(long, value_name = "PATH")]
    pub script: PathBuf,

    /// `.env`-style KEY=VALUE file injected into the script's environment.
    #[arg(long, value_name = "PATH")]
    pub vars: Option<PathBuf>,

    /// Working directory for execution (default: a new temp directory).
    #[arg(long, value_name = "DIR")]
    pub workdir: Option<PathBuf>,

    /// Directory of files to copy into the workdir before running.
    #[arg(long, value_name = "DIR")]
    pub attachments: Option<PathBuf>,

    /// Validate monitor markers and the output line after the run.
    #[arg(long)]
    pub validate_monitor: bool,

    /// Treat the script as a monitor (its output is always validated).
    #[arg(long)]
    pub monitor: bool,

    /// Component category; `monitors` implies `--monitor`.
    #[arg(long, value_enum)]
    pub category: Option<Category>,

    /// Monitor output variable name (default: `[run].output_var` or Status).
    #[arg(long, value_name = "NAME")]
    pub output_var: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// File path to validate, or '-' to read from stdin.
    #[arg(long, value_name = "PATH")]
    pub input: String,

    /// Monitor output variable name (default: `[run].output_var` or Status).
    #[arg(long, value_name = "NAME")]
    pub output_var: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ScaffoldArgs {
    #[arg(long, value_enum)]
    pub os: TargetOs,

    #[arg(long, value_enum)]
    pub category: Category,

    /// Component name (normalized to a kebab-case filename).
    #[arg(long)]
    pub name: String,

    /// Monitor output variable name (default: `[run].output_var` or Status).
    #[arg(long, value_name = "NAME")]
    pub output_var: Option<String>,

    /// Component build/version placeholder.
    #[arg(long, value_name = "VERSION", default_value = "0.1.0")]
    pub component_version: String,

    /// Overwrite an existing file if present.
    #[arg(long)]
    pub force: bool,

    /// Print intended actions without writing files.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Parse the command line, exiting on `--help`/`--version` or bad usage.
///
/// Usage errors exit with [`EXIT_ERROR`] rather than clap's default `2`,
/// which is reserved for monitor validation failures.
pub fn parse() -> CliArgs {
    match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { EXIT_ERROR } else { 0 });
        }
    }
}
