// src/commands/mod.rs

//! One module per subcommand. Each returns the process exit code; fatal
//! errors are returned as `Err` and reported by `main`.

pub mod run;
pub mod scaffold;
pub mod validate;

use std::path::{Path, PathBuf};

use crate::config::ConfigFile;
use crate::errors::Result;
use crate::validate::OutputVar;

/// `--output-var` if given, otherwise the configured default.
pub(crate) fn resolve_output_var(cli: Option<&str>, config: &ConfigFile) -> Result<OutputVar> {
    match cli {
        Some(raw) => OutputVar::parse(raw),
        None => Ok(config.output_var.clone()),
    }
}

/// Relative paths are taken relative to `base`.
pub(crate) fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Print the validation errors as `- <error>` lines on stderr.
pub(crate) fn print_errors(errors: &[String]) {
    for err in errors {
        eprintln!("- {err}");
    }
}
