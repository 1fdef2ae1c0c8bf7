// src/exec/outcome.rs

//! Request/outcome types for one run and the final exit-code rule.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::validate::{OutputVar, ValidationResult};

/// Exit code for a monitor whose script succeeded but whose output is invalid.
pub const EXIT_VALIDATION_FAILED: i32 = 2;

/// Exit code for configuration errors and spawn failures.
pub const EXIT_ERROR: i32 = 1;

/// One run of one script, built by the caller and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ExecutionRequest {
    pub script: PathBuf,
    /// Working directory; a temp directory is allocated when `None`.
    pub workdir: Option<PathBuf>,
    pub env_overrides: BTreeMap<String, String>,
    /// Directory whose top-level files are copied into the workdir.
    pub attachments: Option<PathBuf>,
    pub output_var: OutputVar,
    /// `--validate-monitor` was passed.
    pub validate: bool,
    /// The caller classified the script as a monitor.
    pub monitor: bool,
}

impl ExecutionRequest {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
            workdir: None,
            env_overrides: BTreeMap::new(),
            attachments: None,
            output_var: OutputVar::default(),
            validate: false,
            monitor: false,
        }
    }

    pub fn should_validate(&self) -> bool {
        self.validate || self.monitor
    }
}

/// Result of one run.
#[derive(Debug, Clone)]
pub struct ExecutionOutcome {
    /// Final code, after combining the process code with validation.
    pub exit_code: i32,
    /// The interpreter's own exit code.
    pub process_exit_code: i32,
    pub workdir: PathBuf,
    pub stdout_path: PathBuf,
    pub stderr_path: PathBuf,
    /// Present only when validation ran.
    pub validation: Option<ValidationResult>,
}

/// Combine the process exit code with the validation result.
///
/// Invalid output turns a successful run into [`EXIT_VALIDATION_FAILED`], but
/// never hides a failure the script reported itself.
pub fn final_exit_code(process_exit_code: i32, validation: Option<&ValidationResult>) -> i32 {
    match validation {
        Some(result) if !result.ok() && process_exit_code == 0 => EXIT_VALIDATION_FAILED,
        _ => process_exit_code,
    }
}
