use std::future::Future;
use std::io::Write;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use rmmkit::errors::Result;
use rmmkit::exec::{CaptureFiles, ProcessBackend, ProcessSpec};

/// A fake process backend that:
/// - records every `ProcessSpec` it was asked to run
/// - writes canned stdout/stderr into the capture files
/// - returns a fixed exit code without spawning anything.
#[derive(Clone, Default)]
pub struct FakeBackend {
    stdout: String,
    stderr: String,
    exit_code: i32,
    runs: Arc<Mutex<Vec<ProcessSpec>>>,
}

impl FakeBackend {
    pub fn new(stdout: impl Into<String>, exit_code: i32) -> Self {
        Self {
            stdout: stdout.into(),
            exit_code,
            ..Self::default()
        }
    }

    pub fn with_stderr(mut self, stderr: impl Into<String>) -> Self {
        self.stderr = stderr.into();
        self
    }

    /// Shared handle to the recorded specs; stays valid after the backend
    /// has been moved into an orchestrator.
    pub fn runs(&self) -> Arc<Mutex<Vec<ProcessSpec>>> {
        Arc::clone(&self.runs)
    }
}

impl ProcessBackend for FakeBackend {
    fn run<'a>(
        &'a self,
        spec: &'a ProcessSpec,
        mut capture: CaptureFiles,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + 'a>> {
        Box::pin(async move {
            self.runs.lock().unwrap().push(spec.clone());
            capture.stdout.write_all(self.stdout.as_bytes())?;
            capture.stderr.write_all(self.stderr.as_bytes())?;
            Ok(self.exit_code)
        })
    }
}
