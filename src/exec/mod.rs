// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`outcome`] holds the request/outcome types and the exit-code rule.
//! - [`orchestrator`] prepares the execution context and drives one run.
//! - [`interpreter`] maps script extensions to interpreter command lines.
//! - [`env`] snapshots the ambient environment and parses `--vars` files.
//! - [`workdir`] allocates the working directory and copies attachments.
//! - [`backend`] provides the `ProcessBackend` trait and the
//!   `RealProcessBackend` used in production, which tests can replace.

pub mod backend;
pub mod env;
pub mod interpreter;
pub mod orchestrator;
pub mod outcome;
pub mod workdir;

pub use backend::{CaptureFiles, ProcessBackend, ProcessSpec, RealProcessBackend};
pub use env::{parse_env_file, EnvSnapshot};
pub use interpreter::{InterpreterCommand, ScriptKind};
pub use orchestrator::{Orchestrator, PreparedRun, STDERR_FILE, STDOUT_FILE};
pub use outcome::{
    final_exit_code, ExecutionOutcome, ExecutionRequest, EXIT_ERROR, EXIT_VALIDATION_FAILED,
};
