#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rmmkit::exec::ExecutionRequest;
use rmmkit::validate::OutputVar;

/// Builder for monitor output text.
///
/// Defaults to a well-formed block with `Status=OK: all good` as the result.
pub struct MonitorOutputBuilder {
    diagnostics: Vec<String>,
    result_lines: Vec<String>,
}

impl MonitorOutputBuilder {
    pub fn new() -> Self {
        Self {
            diagnostics: vec!["checking".to_string()],
            result_lines: vec!["Status=OK: all good".to_string()],
        }
    }

    pub fn diagnostic(mut self, line: &str) -> Self {
        self.diagnostics.push(line.to_string());
        self
    }

    /// Replace the result block content.
    pub fn result_lines(mut self, lines: &[&str]) -> Self {
        self.result_lines = lines.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn build(self) -> String {
        let mut out = String::from("<-Start Diagnostic->\n");
        for line in &self.diagnostics {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("<-End Diagnostic->\n<-Start Result->\n");
        for line in &self.result_lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("<-End Result->\n");
        out
    }
}

impl Default for MonitorOutputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `ExecutionRequest`.
pub struct RequestBuilder {
    request: ExecutionRequest,
}

impl RequestBuilder {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            request: ExecutionRequest::new(script),
        }
    }

    pub fn workdir(mut self, dir: &Path) -> Self {
        self.request.workdir = Some(dir.to_path_buf());
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.request
            .env_overrides
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn attachments(mut self, dir: &Path) -> Self {
        self.request.attachments = Some(dir.to_path_buf());
        self
    }

    pub fn output_var(mut self, name: &str) -> Self {
        self.request.output_var = OutputVar::parse(name).expect("valid output var in test");
        self
    }

    pub fn validate(mut self) -> Self {
        self.request.validate = true;
        self
    }

    pub fn monitor(mut self) -> Self {
        self.request.monitor = true;
        self
    }

    pub fn build(self) -> ExecutionRequest {
        self.request
    }
}

/// Write a script file into `dir` and return its path.
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).expect("write test script");
    path
}
