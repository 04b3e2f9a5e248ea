pub mod clean;
pub mod init;
pub mod project;
pub mod run;
pub mod show;

pub use clean::clean_command;
pub use init::init_command;
pub use project::project_command;
pub use run::run_command;
pub use show::show_command;

use anyhow::{Context, Result};
use file_runner_core::{Config, ConfigLoader, services::PathFileState};
use std::path::Path;

use crate::utils::{detect_language_id, resolve_workspace};

/// Configuration snapshot for an invocation starting at `start`
pub(crate) fn load_config(start: &Path) -> Result<Config> {
    ConfigLoader::from_env(start)
        .load()
        .context("Failed to load configuration")
}

/// File state for a path given on the command line
pub(crate) fn file_state(file: &Path, language: Option<&str>) -> Result<PathFileState> {
    let language_id = match language {
        Some(language) => language.to_string(),
        None => detect_language_id(file),
    };
    tracing::debug!("Language id for {:?}: '{}'", file, language_id);

    let workspace = resolve_workspace(None)?;
    Ok(PathFileState::new(file, language_id).with_workspace(workspace))
}

/// Exit with the status of a failed command
pub(crate) fn exit_on_failure(status: std::process::ExitStatus) {
    if !status.success() {
        std::process::exit(status.code().unwrap_or(1));
    }
}
