use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::interfaces::ExecutionRequest;

/// A compile/run template pair for languages with a build step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileCommand {
    #[serde(default)]
    pub compile: String,
    #[serde(default)]
    pub run: String,
}

impl CompileCommand {
    pub fn new(compile: impl Into<String>, run: impl Into<String>) -> Self {
        Self {
            compile: compile.into(),
            run: run.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.compile.is_empty() && self.run.is_empty()
    }
}

/// Compile and run commands with every placeholder filled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCommandPair {
    pub compile: String,
    pub run: String,
    pub out_dir: PathBuf,
}

impl ResolvedCommandPair {
    /// Render both steps as one line for display
    pub fn to_shell_command(&self) -> String {
        format!("{} && {}", self.compile, self.run)
    }
}

/// What to do with the current file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunPlan {
    CompileAndRun {
        pair: ResolvedCommandPair,
        cwd: PathBuf,
    },
    Direct {
        command: String,
        cwd: PathBuf,
    },
}

impl RunPlan {
    pub fn cwd(&self) -> &Path {
        match self {
            RunPlan::CompileAndRun { cwd, .. } | RunPlan::Direct { cwd, .. } => cwd,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RunPlan::CompileAndRun { .. } => "Compile and Run",
            RunPlan::Direct { .. } => "Run",
        }
    }

    /// Commands in execution order
    pub fn steps(&self) -> Vec<String> {
        match self {
            RunPlan::CompileAndRun { pair, .. } => vec![pair.compile.clone(), pair.run.clone()],
            RunPlan::Direct { command, .. } => vec![command.clone()],
        }
    }

    pub fn to_shell_command(&self) -> String {
        match self {
            RunPlan::CompileAndRun { pair, .. } => pair.to_shell_command(),
            RunPlan::Direct { command, .. } => command.clone(),
        }
    }

    pub fn to_request(&self) -> ExecutionRequest {
        ExecutionRequest::new(self.name(), self.cwd(), self.steps())
    }
}

/// A whole-project command ready to run from the workspace root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPlan {
    pub command_type: String,
    pub command: String,
    pub cwd: PathBuf,
    pub name: String,
}

impl ProjectPlan {
    pub fn to_request(&self) -> ExecutionRequest {
        ExecutionRequest::new(self.name.clone(), &self.cwd, vec![self.command.clone()])
    }
}
