// src/exec/orchestrator.rs

//! Running one script end to end.
//!
//! A run goes through `Preparing → Running → Captured → (Validating)? → Done`
//! exactly once:
//!
//! - [`Orchestrator::prepare`] checks the request (script, extension,
//!   attachments) before touching the filesystem, then sets up the workdir,
//!   environment and attachments.
//! - [`PreparedRun::run`] spawns the interpreter with output redirected into
//!   `stdout.txt`/`stderr.txt`, waits for it, optionally validates stdout and
//!   computes the final exit code.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Context;
use tracing::{debug, info, warn};

use crate::config::InterpretersSection;
use crate::errors::{Result, RmmError};
use crate::exec::backend::{CaptureFiles, ProcessBackend, ProcessSpec};
use crate::exec::env::EnvSnapshot;
use crate::exec::interpreter::InterpreterCommand;
use crate::exec::outcome::{final_exit_code, ExecutionOutcome, ExecutionRequest};
use crate::exec::workdir::{copy_attachments, ensure_attachments_dir, prepare_workdir};
use crate::validate::{validate_monitor_output, OutputVar};

pub const STDOUT_FILE: &str = "stdout.txt";
pub const STDERR_FILE: &str = "stderr.txt";

pub struct Orchestrator<B: ProcessBackend> {
    backend: B,
    interpreters: InterpretersSection,
}

impl<B: ProcessBackend> Orchestrator<B> {
    pub fn new(backend: B, interpreters: InterpretersSection) -> Self {
        Self {
            backend,
            interpreters,
        }
    }

    /// Prepare and run `request` against a fresh snapshot of the process
    /// environment.
    pub async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionOutcome> {
        self.prepare(request, &EnvSnapshot::capture())?.run(self).await
    }

    /// Validate the request and set up the execution context.
    ///
    /// Configuration errors are returned before any directory is created or
    /// file copied.
    pub fn prepare(&self, request: &ExecutionRequest, base_env: &EnvSnapshot) -> Result<PreparedRun> {
        if !request.script.is_file() {
            return Err(RmmError::config(format!(
                "--script not found: {}",
                request.script.display()
            )));
        }
        let command = InterpreterCommand::for_script(&request.script, &self.interpreters)?;
        if let Some(source) = &request.attachments {
            ensure_attachments_dir(source)?;
        }

        let workdir = prepare_workdir(request.workdir.as_deref())?;
        let env = base_env.merged(&request.env_overrides);

        if let Some(source) = &request.attachments {
            let copied = copy_attachments(source, &workdir)?;
            debug!(count = copied.len(), workdir = %workdir.display(), "copied attachments");
        }

        Ok(PreparedRun {
            script: request.script.clone(),
            command,
            stdout_path: workdir.join(STDOUT_FILE),
            stderr_path: workdir.join(STDERR_FILE),
            workdir,
            env,
            output_var: request.output_var.clone(),
            validate: request.should_validate(),
        })
    }
}

/// A request whose execution context is ready; consumed by [`PreparedRun::run`].
#[derive(Debug)]
pub struct PreparedRun {
    pub script: PathBuf,
    pub command: InterpreterCommand,
    pub workdir: PathBuf,
    pub stdout_path: PathBuf,
    pub stderr_path: PathBuf,
    env: BTreeMap<OsString, OsString>,
    output_var: OutputVar,
    validate: bool,
}

impl PreparedRun {
    pub async fn run<B: ProcessBackend>(self, orchestrator: &Orchestrator<B>) -> Result<ExecutionOutcome> {
        let spec = ProcessSpec {
            program: self.command.program.clone(),
            args: self.command.args.clone(),
            cwd: self.workdir.clone(),
            env: self.env,
        };

        info!(
            script = %self.script.display(),
            workdir = %self.workdir.display(),
            cmd = %self.command.display(),
            "running script"
        );

        let process_exit_code = {
            let capture = CaptureFiles::create(&self.stdout_path, &self.stderr_path)?;
            orchestrator.backend.run(&spec, capture).await?
        };

        let validation = if self.validate {
            let bytes = tokio::fs::read(&self.stdout_path)
                .await
                .with_context(|| format!("reading back {}", self.stdout_path.display()))?;
            let result = validate_monitor_output(&String::from_utf8_lossy(&bytes), &self.output_var);
            if !result.ok() {
                warn!(
                    output_var = %self.output_var,
                    errors = result.errors().len(),
                    "monitor output failed validation"
                );
            }
            Some(result)
        } else {
            None
        };

        let exit_code = final_exit_code(process_exit_code, validation.as_ref());
        debug!(process_exit_code, exit_code, "run finished");

        Ok(ExecutionOutcome {
            exit_code,
            process_exit_code,
            workdir: self.workdir,
            stdout_path: self.stdout_path,
            stderr_path: self.stderr_path,
            validation,
        })
    }
}
