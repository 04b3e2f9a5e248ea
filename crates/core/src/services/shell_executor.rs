//! Executor that runs each step through the platform shell

use crate::{
    error::{Error, Result},
    interfaces::{ExecutionRequest, Executor},
};
use std::process::{Command, ExitStatus};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ShellExecutor {
    shell: String,
    flag: String,
}

impl Default for ShellExecutor {
    fn default() -> Self {
        if cfg!(windows) {
            Self::with_shell("cmd", "/C")
        } else {
            Self::with_shell("sh", "-c")
        }
    }
}

impl ShellExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shell(shell: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            flag: flag.into(),
        }
    }

    fn command_for(&self, step: &str, request: &ExecutionRequest) -> Command {
        let mut cmd = Command::new(&self.shell);
        cmd.arg(&self.flag).arg(step);

        // A relative file has an empty directory; run from the current one
        if !request.cwd.as_os_str().is_empty() {
            cmd.current_dir(&request.cwd);
        }
        cmd
    }
}

impl Executor for ShellExecutor {
    fn execute(&self, request: &ExecutionRequest) -> Result<ExitStatus> {
        let (first, rest) = request
            .steps
            .split_first()
            .ok_or_else(|| Error::Other(format!("No command specified for '{}'", request.name)))?;

        debug!("Executing '{}' in {:?}", request.name, request.cwd);
        info!("Running: {}", first);
        let mut status = self.command_for(first, request).status()?;

        for step in rest {
            if !status.success() {
                debug!("Previous step failed with {}, skipping the rest", status);
                break;
            }
            info!("Running: {}", step);
            status = self.command_for(step, request).status()?;
        }

        Ok(status)
    }
}
