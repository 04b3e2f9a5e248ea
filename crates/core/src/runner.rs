//! Main runner that coordinates configuration lookup, substitution and composition

use crate::{
    compose::{compile_out_dir, compose_compile_and_run},
    config::{Config, ConfigProvider},
    error::{Error, Result},
    interfaces::{FileStateProvider, FileSystem},
    resolver::CommandResolver,
    services::StdFileSystem,
    template::{Bindings, Placeholder, placeholders_in, substitute, unbound_placeholders},
    types::{LanguageId, PathInfo, ProjectPlan, RunPlan},
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A configured project command, as offered for selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCommandEntry {
    pub command_type: String,
    pub command: String,
    pub is_default: bool,
}

/// Result of clearing the compile output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearOutcome {
    Removed(PathBuf),
    Missing(PathBuf),
    NoActiveFile,
}

pub struct Runner {
    config: Config,
    fs: Box<dyn FileSystem>,
}

impl Runner {
    pub fn new(config: Config) -> Self {
        Self::with_file_system(config, Box::new(StdFileSystem::new()))
    }

    pub fn with_file_system(config: Config, fs: Box<dyn FileSystem>) -> Self {
        Self { config, fs }
    }

    /// Take a fresh snapshot from `provider`
    pub fn from_provider(provider: &dyn ConfigProvider) -> Result<Self> {
        Ok(Self::new(provider.snapshot()?))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn resolver(&self) -> CommandResolver<'_> {
        CommandResolver::new(&self.config)
    }

    /// Plan for the active file, or `None` when nothing is open
    pub fn plan_current_file(&self, state: &dyn FileStateProvider) -> Result<Option<RunPlan>> {
        let Some(active) = state.active_file() else {
            debug!("No active file, nothing to run");
            return Ok(None);
        };

        let language_id = LanguageId::normalize(&active.language_id);
        let workspace = state.workspace_root();
        self.plan_file(&language_id, &active.path, workspace.as_deref())
            .map(Some)
    }

    /// Plan for a specific file: compile/run pair if configured, else the run template
    pub fn plan_file(
        &self,
        language_id: &LanguageId,
        path: &PathInfo,
        workspace: Option<&Path>,
    ) -> Result<RunPlan> {
        debug!("Planning {:?} as '{}'", path.file_path, language_id);

        if let Some(pair) = compose_compile_and_run(
            language_id.as_str(),
            &path.dir,
            &path.file_path,
            &path.filename,
            &self.config.compile_commands,
            self.config.compile_out_dir_name(),
            self.fs.as_ref(),
        )? {
            info!("Using compile command for '{}'", language_id);
            return Ok(RunPlan::CompileAndRun {
                pair,
                cwd: path.dir.clone(),
            });
        }

        let template = self
            .resolver()
            .run_command(language_id)
            .ok_or_else(|| Error::CommandNotFound {
                language: language_id.to_string(),
            })?;

        let mut bindings = Bindings::new().file(path.file_path.to_string_lossy());
        if let Some(workspace) = workspace {
            bindings = bindings.workspace(workspace.to_string_lossy());
        }
        warn_unbound(template, &bindings);

        Ok(RunPlan::Direct {
            command: substitute(template, &bindings),
            cwd: path.dir.clone(),
        })
    }

    /// Plan a whole-project command run from the workspace root.
    ///
    /// `command_type` defaults to the configured project default command.
    pub fn plan_project(
        &self,
        command_type: Option<&str>,
        workspace: Option<&Path>,
        current_file: Option<&Path>,
    ) -> Result<ProjectPlan> {
        let workspace = workspace.ok_or(Error::NoWorkspace)?;
        let command_type = command_type.unwrap_or_else(|| self.config.default_project_command());

        let template = self
            .resolver()
            .project_command(command_type)
            .ok_or_else(|| Error::ProjectCommandNotFound {
                command_type: command_type.to_string(),
            })?;

        let needs_file = placeholders_in(template).contains(&Placeholder::File);
        if needs_file && current_file.is_none() {
            return Err(Error::FileRequired);
        }

        let mut bindings = Bindings::new().workspace(workspace.to_string_lossy());
        if let Some(file) = current_file {
            bindings = bindings.file(file.to_string_lossy());
        }
        warn_unbound(template, &bindings);

        Ok(ProjectPlan {
            command_type: command_type.to_string(),
            command: substitute(template, &bindings),
            cwd: workspace.to_path_buf(),
            name: format!("Run Project ({command_type})"),
        })
    }

    /// Configured project commands, the default one first
    pub fn project_command_types(&self) -> Vec<ProjectCommandEntry> {
        let default = self.config.default_project_command();
        let mut entries: Vec<_> = self
            .config
            .project_commands
            .iter()
            .map(|(command_type, command)| ProjectCommandEntry {
                command_type: command_type.clone(),
                command: command.clone(),
                is_default: command_type == default,
            })
            .collect();
        // Stable, so the rest keep their key order
        entries.sort_by_key(|entry| !entry.is_default);
        entries
    }

    /// Output directory that compiling the active file would use
    pub fn out_dir_for(&self, path: &PathInfo) -> PathBuf {
        compile_out_dir(&path.dir, self.config.compile_out_dir_name())
    }

    /// Remove the compile output directory next to the active file
    pub fn clear_out_dir(&self, state: &dyn FileStateProvider) -> Result<ClearOutcome> {
        let Some(active) = state.active_file() else {
            return Ok(ClearOutcome::NoActiveFile);
        };

        let out_dir = self.out_dir_for(&active.path);
        if self.fs.remove_dir_recursive(&out_dir)? {
            info!("Cleared output directory {:?}", out_dir);
            Ok(ClearOutcome::Removed(out_dir))
        } else {
            warn!("Output directory {:?} does not exist", out_dir);
            Ok(ClearOutcome::Missing(out_dir))
        }
    }
}

fn warn_unbound(template: &str, bindings: &Bindings) {
    for placeholder in unbound_placeholders(template, bindings) {
        warn!("Template '{}' uses {} which has no value here", template, placeholder);
    }
}
