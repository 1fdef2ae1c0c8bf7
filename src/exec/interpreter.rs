// src/exec/interpreter.rs

//! Picking the interpreter for a script from its file extension.

use std::ffi::OsString;
use std::path::Path;

use crate::config::InterpretersSection;
use crate::errors::{Result, RmmError};

/// Class of script, determined by extension (case-insensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    /// `.sh`, run with a POSIX shell.
    Shell,
    /// `.ps1`, run with PowerShell.
    PowerShell,
}

impl ScriptKind {
    pub fn from_path(script: &Path) -> Result<Self> {
        let ext = script
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "sh" => Ok(ScriptKind::Shell),
            "ps1" => Ok(ScriptKind::PowerShell),
            "" => Err(RmmError::config("Unsupported script extension: (none)")),
            other => Err(RmmError::config(format!(
                "Unsupported script extension: .{other}"
            ))),
        }
    }
}

/// Program plus arguments that will run a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterCommand {
    pub program: String,
    pub args: Vec<OsString>,
}

impl InterpreterCommand {
    pub fn for_script(script: &Path, interpreters: &InterpretersSection) -> Result<Self> {
        let cmd = match ScriptKind::from_path(script)? {
            ScriptKind::Shell => Self {
                program: interpreters.shell.clone(),
                args: vec![script.as_os_str().to_owned()],
            },
            ScriptKind::PowerShell => {
                let mut args: Vec<OsString> = [
                    "-NoProfile",
                    "-NonInteractive",
                    "-ExecutionPolicy",
                    "Bypass",
                    "-File",
                ]
                .into_iter()
                .map(OsString::from)
                .collect();
                args.push(script.as_os_str().to_owned());
                Self {
                    program: interpreters.powershell.clone(),
                    args,
                }
            }
        };
        Ok(cmd)
    }

    /// Shell-quoted rendering for display, e.g. `bash '/tmp/my script.sh'`.
    pub fn display(&self) -> String {
        std::iter::once(shell_quote(&self.program))
            .chain(self.args.iter().map(|a| shell_quote(&a.to_string_lossy())))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn shell_quote(s: &str) -> String {
    if s.is_empty() {
        return "''".to_string();
    }
    let safe = s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "@%+=:,./-_".contains(c));
    if safe {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', r#"'"'"'"#))
    }
}
