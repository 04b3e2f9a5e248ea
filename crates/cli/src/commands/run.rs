use anyhow::{Context, Result, bail};
use file_runner_core::{Executor, Runner, services::ShellExecutor};
use tracing::{debug, info};

use super::{exit_on_failure, file_state, load_config};
use crate::display::print_run_plan;
use crate::utils::{PreviewFileSystem, resolve_path};

pub fn run_command(filepath_arg: &str, language: Option<&str>, dry_run: bool) -> Result<()> {
    let file = resolve_path(filepath_arg)?;
    if !file.is_file() {
        bail!("File not found: {}", file.display());
    }
    debug!("Running file: {}", file.display());

    let config = load_config(&file)?;
    let runner = if dry_run {
        Runner::with_file_system(config, Box::new(PreviewFileSystem))
    } else {
        Runner::new(config)
    };

    let state = file_state(&file, language)?;
    let Some(plan) = runner.plan_current_file(&state)? else {
        println!("ℹ️  No active file");
        return Ok(());
    };

    if dry_run {
        print_run_plan(&plan);
        return Ok(());
    }

    let shell_cmd = plan.to_shell_command();
    info!("Running: {}", shell_cmd);
    info!("Working directory: {}", plan.cwd().display());

    let status = ShellExecutor::new()
        .execute(&plan.to_request())
        .with_context(|| format!("Failed to execute: {}", shell_cmd))?;
    exit_on_failure(status);

    Ok(())
}
