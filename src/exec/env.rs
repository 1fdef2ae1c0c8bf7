// src/exec/env.rs

//! Environment for the child process.
//!
//! The ambient environment is captured once per run into an [`EnvSnapshot`];
//! overrides from a `--vars` file are applied by building a new map. The
//! process environment itself is never modified.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::errors::{Result, RmmError};

/// Immutable copy of an environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<OsString, OsString>,
}

impl EnvSnapshot {
    /// Snapshot of the current process environment.
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars_os().collect(),
        }
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        Self {
            vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// New mapping with `overrides` laid over the snapshot. Overrides win.
    pub fn merged(&self, overrides: &BTreeMap<String, String>) -> BTreeMap<OsString, OsString> {
        let mut env = self.vars.clone();
        for (key, value) in overrides {
            env.insert(OsString::from(key), OsString::from(value));
        }
        env
    }
}

/// Parse a `.env`-style `KEY=VALUE` file.
///
/// Blank lines and `#` comments are skipped and an `export ` prefix is
/// accepted. A value starting with a quote is unquoted once with shell rules;
/// if that fails or yields more than one word the raw value is kept. Nothing
/// is expanded: `$NAME` stays literal. A line without `=` or with an empty key
/// is an error.
pub fn parse_env_file(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.is_file() {
        return Err(RmmError::config(format!(
            "--vars file not found: {}",
            path.display()
        )));
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("reading --vars file {}", path.display()))?;

    let mut env = BTreeMap::new();
    for (idx, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").map_or(line, str::trim);

        let invalid = |reason| RmmError::EnvLine {
            path: path.to_path_buf(),
            line_no: idx + 1,
            reason,
            line: raw_line.to_string(),
        };
        let (key, value) = line.split_once('=').ok_or_else(|| invalid("expected KEY=VALUE"))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(invalid("empty key"));
        }
        env.insert(key.to_string(), unquote(value.trim()));
    }

    debug!(path = %path.display(), count = env.len(), "loaded environment overrides");
    Ok(env)
}

fn unquote(value: &str) -> String {
    if !value.starts_with(['\'', '"']) {
        return value.to_string();
    }
    match shlex::split(value) {
        Some(mut words) if words.len() == 1 => words.remove(0),
        _ => value.to_string(),
    }
}
