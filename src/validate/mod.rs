// src/validate/mod.rs

//! Monitor output validation.
//!
//! A monitor must print a diagnostic section and a result section delimited
//! by four marker lines:
//!
//! ```text
//! <-Start Diagnostic->
//! ...free-form diagnostics...
//! <-End Diagnostic->
//! <-Start Result->
//! Status=OK: All checks passed
//! <-End Result->
//! ```
//!
//! [`validate_monitor_output`] checks this in stages, from structural to
//! content-level. Each stage stops the check when it fails, so the first
//! reported problem is always the most fundamental one. The marker-count
//! stage is the only one that reports several problems at once.

pub mod markers;
pub mod output_var;

pub use markers::{Marker, MarkerPositions};
pub use output_var::OutputVar;

use crate::errors::Result;

/// Outcome of validating one block of monitor output.
///
/// `ok()` is true exactly when `errors()` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self { errors: Vec::new() }
    }

    fn invalid(errors: Vec<String>) -> Self {
        debug_assert!(!errors.is_empty());
        Self { errors }
    }

    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

/// Validate `text` against the marker protocol for the given output variable.
///
/// Pure and deterministic: the same input always yields the same result.
pub fn validate_monitor_output(text: &str, output_var: &OutputVar) -> ValidationResult {
    match check(text, output_var) {
        Ok(()) => ValidationResult::valid(),
        Err(errors) => ValidationResult::invalid(errors),
    }
}

/// Same as [`validate_monitor_output`] but takes the variable name as a raw
/// string. A malformed name is a configuration error, not a validation one.
pub fn validate_with_name(text: &str, output_var: &str) -> Result<ValidationResult> {
    let var = OutputVar::parse(output_var)?;
    Ok(validate_monitor_output(text, &var))
}

fn check(text: &str, output_var: &OutputVar) -> std::result::Result<(), Vec<String>> {
    let lines: Vec<&str> = text.lines().collect();
    let found = MarkerPositions::scan(&lines);

    let Some([diag_start, diag_end, res_start, res_end]) = found.unique() else {
        return Err(count_errors(&found));
    };
    if !(diag_start < diag_end && diag_end < res_start && res_start < res_end) {
        return Err(vec![
            "Marker order must be: Start Diagnostic -> End Diagnostic -> Start Result -> End Result."
                .to_string(),
        ]);
    }

    // (line index, line) for every non-blank line of the result block.
    let non_empty: Vec<(usize, &str)> = lines[res_start + 1..res_end]
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(offset, line)| (res_start + 1 + offset, *line))
        .collect();
    if non_empty.is_empty() {
        return Err(vec![
            "Result block is empty; expected one output variable line.".to_string(),
        ]);
    }

    let matching: Vec<(usize, &str)> = non_empty
        .iter()
        .copied()
        .filter(|(_, line)| assignment_value(line, output_var).is_some())
        .collect();
    let &[(match_idx, match_line)] = matching.as_slice() else {
        return Err(vec![
            format!(
                "Expected exactly one '{output_var}=...' line inside the result block; found {}.",
                matching.len()
            ),
            "Example: Status=OK: All checks passed".to_string(),
        ]);
    };

    let extra: Vec<&str> = non_empty
        .iter()
        .filter(|(idx, _)| *idx != match_idx)
        .map(|(_, line)| *line)
        .collect();
    if !extra.is_empty() {
        return Err(vec![
            "Result block must contain exactly one non-empty line (the output variable line)."
                .to_string(),
            format!("Unexpected additional lines: {}", quoted_list(&extra)),
        ]);
    }

    let value = assignment_value(match_line, output_var).unwrap_or_default();
    if value.starts_with(char::is_whitespace) {
        return Err(vec![
            "Do not include spaces around '=' (use 'Status=OK: ...', not 'Status= OK: ...')."
                .to_string(),
        ]);
    }

    Ok(())
}

/// One error per marker that does not occur exactly once.
fn count_errors(found: &MarkerPositions) -> Vec<String> {
    Marker::ALL
        .into_iter()
        .filter(|m| found.of(*m).len() != 1)
        .map(|m| format!("Expected exactly one '{}' line.", m.literal()))
        .collect()
}

/// If `line` has the shape `<output_var>=<value>` with a non-empty value,
/// return the value.
fn assignment_value<'a>(line: &'a str, output_var: &OutputVar) -> Option<&'a str> {
    line.strip_prefix(output_var.as_str())
        .and_then(|rest| rest.strip_prefix('='))
        .filter(|value| !value.is_empty())
}

/// Render lines as `['a', 'b']`. A line holding `'` but no `"` is wrapped in
/// double quotes instead.
fn quoted_list(lines: &[&str]) -> String {
    let items: Vec<String> = lines.iter().map(|line| quoted(line)).collect();
    format!("[{}]", items.join(", "))
}

fn quoted(line: &str) -> String {
    let quote = if line.contains('\'') && !line.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(line.len() + 2);
    out.push(quote);
    for c in line.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
