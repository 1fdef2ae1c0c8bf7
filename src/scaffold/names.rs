// src/scaffold/names.rs

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{Result, RmmError};

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("static pattern"));

/// Turn a free-form component name into a kebab-case file stem.
///
/// `"Disk Space  Check!"` becomes `"disk-space-check"`.
pub fn normalize_kebab(raw: &str) -> Result<String> {
    let lowered = raw.trim().to_lowercase();
    let value = NON_ALNUM.replace_all(&lowered, "-");
    let value = value.trim_matches('-');
    if value.is_empty() {
        return Err(RmmError::config(format!(
            "Invalid name '{raw}': produced an empty filename after normalization"
        )));
    }
    Ok(value.to_string())
}
