use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use crate::error::Result;

/// Finished commands handed to an executor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRequest {
    /// Display name (task or terminal title)
    pub name: String,
    /// Working directory for every step
    pub cwd: PathBuf,
    /// Commands to run in order. A failing step stops the sequence.
    pub steps: Vec<String>,
}

impl ExecutionRequest {
    pub fn new(name: impl Into<String>, cwd: &Path, steps: Vec<String>) -> Self {
        Self {
            name: name.into(),
            cwd: cwd.to_path_buf(),
            steps,
        }
    }
}

/// Runs finished command strings
pub trait Executor {
    /// Run the request and report the status of the last step that ran
    fn execute(&self, request: &ExecutionRequest) -> Result<ExitStatus>;
}
