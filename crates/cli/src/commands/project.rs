use anyhow::{Context, Result};
use file_runner_core::{Executor, Runner, services::ShellExecutor};
use std::path::Path;
use tracing::info;

use super::{exit_on_failure, load_config};
use crate::display::{print_project_entries, print_project_plan};
use crate::utils::{resolve_path, resolve_workspace};

pub fn project_command(
    command_type: Option<&str>,
    workspace: Option<&str>,
    file: Option<&str>,
    list: bool,
    dry_run: bool,
) -> Result<()> {
    let workspace = resolve_workspace(workspace)?;
    let runner = Runner::new(load_config(&workspace)?);

    if list {
        print_project_entries(&runner.project_command_types());
        return Ok(());
    }

    let current_file = file.map(resolve_path).transpose()?;
    let plan = runner.plan_project(command_type, Some(workspace.as_path()), current_file.as_deref())?;

    if dry_run {
        print_project_plan(&plan);
        return Ok(());
    }

    info!("Running: {}", plan.command);
    let status = ShellExecutor::new()
        .execute(&plan.to_request())
        .with_context(|| format!("Failed to execute: {}", plan.command))?;

    if status.success() {
        println!("✅ Ran project: {}", project_name(&workspace));
    }
    exit_on_failure(status);

    Ok(())
}

fn project_name(workspace: &Path) -> String {
    workspace
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| workspace.display().to_string())
}
