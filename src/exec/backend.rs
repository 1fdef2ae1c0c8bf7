// src/exec/backend.rs

//! Pluggable process backend.
//!
//! The orchestrator talks to a `ProcessBackend` instead of spawning processes
//! itself. `RealProcessBackend` is the production implementation built on
//! `tokio::process`; tests can provide one that writes canned output into the
//! capture files and returns a chosen exit code without spawning anything.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs::File;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::process::Stdio;

use anyhow::Context;
use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{Result, RmmError};

/// Exit code reported when the child was terminated without one (signal).
pub const NO_EXIT_CODE: i32 = -1;

/// Everything needed to launch the interpreter.
#[derive(Debug, Clone)]
pub struct ProcessSpec {
    pub program: String,
    pub args: Vec<OsString>,
    pub cwd: PathBuf,
    /// Complete environment of the child; nothing else is inherited.
    pub env: BTreeMap<OsString, OsString>,
}

/// The two files the child's stdout and stderr are redirected into.
///
/// Owned by one run; both handles are closed when this value (or the
/// `Stdio` it was turned into) is dropped, whatever path the run takes.
#[derive(Debug)]
pub struct CaptureFiles {
    pub stdout: File,
    pub stderr: File,
}

impl CaptureFiles {
    pub fn create(stdout_path: &Path, stderr_path: &Path) -> Result<Self> {
        let stdout = File::create(stdout_path)
            .with_context(|| format!("creating {}", stdout_path.display()))?;
        let stderr = File::create(stderr_path)
            .with_context(|| format!("creating {}", stderr_path.display()))?;
        Ok(Self { stdout, stderr })
    }
}

/// Trait abstracting how the interpreter process is run.
pub trait ProcessBackend: Send + Sync {
    /// Run the process to completion with its output redirected into
    /// `capture`, and return its exit code.
    fn run<'a>(
        &'a self,
        spec: &'a ProcessSpec,
        capture: CaptureFiles,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + 'a>>;
}

/// Production backend: one `tokio::process::Command` per run.
#[derive(Debug, Clone, Default)]
pub struct RealProcessBackend;

impl ProcessBackend for RealProcessBackend {
    fn run<'a>(
        &'a self,
        spec: &'a ProcessSpec,
        capture: CaptureFiles,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + 'a>> {
        Box::pin(async move {
            let mut cmd = Command::new(&spec.program);
            cmd.args(&spec.args)
                .current_dir(&spec.cwd)
                .env_clear()
                .envs(&spec.env)
                .stdout(Stdio::from(capture.stdout))
                .stderr(Stdio::from(capture.stderr))
                .kill_on_drop(true);

            let mut child = cmd.spawn().map_err(|source| RmmError::Spawn {
                program: spec.program.clone(),
                source,
            })?;
            debug!(program = %spec.program, pid = ?child.id(), "interpreter started");

            let status = child
                .wait()
                .await
                .with_context(|| format!("waiting for {}", spec.program))?;

            let code = status.code().unwrap_or(NO_EXIT_CODE);
            info!(
                program = %spec.program,
                exit_code = code,
                success = status.success(),
                "interpreter exited"
            );
            Ok(code)
        })
    }
}
