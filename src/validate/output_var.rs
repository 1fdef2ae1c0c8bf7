// src/validate/output_var.rs

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{Result, RmmError};

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("static output var pattern"));

/// Name of the monitor output variable (the left-hand side of `Status=...`).
///
/// Only letters, digits and underscore are allowed. Construct with
/// [`OutputVar::parse`]; a value of this type is always valid, so the
/// validator never has to deal with a degenerate name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputVar(String);

impl OutputVar {
    pub const DEFAULT: &'static str = "Status";

    /// Trim surrounding whitespace and check the remaining name.
    pub fn parse(raw: &str) -> Result<Self> {
        let name = raw.trim();
        if !NAME_RE.is_match(name) {
            return Err(RmmError::config(format!(
                "Invalid --output-var '{name}'. Use only letters, digits, and underscore (example: Status)."
            )));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for OutputVar {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl FromStr for OutputVar {
    type Err = RmmError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for OutputVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
