use crate::{
    error::{Error, Result},
    types::CompileCommand,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::CONFIG_FILE_NAMES;

pub const DEFAULT_COMPILE_OUT_DIR: &str = "out";
pub const DEFAULT_PROJECT_COMMAND: &str = "npm";

pub type RunCommands = BTreeMap<String, String>;
pub type CompileCommands = BTreeMap<String, CompileCommand>;
pub type ProjectCommands = BTreeMap<String, String>;

/// Typed configuration snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Direct run templates keyed by language id
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub run_commands: RunCommands,

    /// Compile/run template pairs keyed by language id
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub compile_commands: CompileCommands,

    /// Whole-project templates keyed by command type (npm, yarn, cargo, ...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub project_commands: ProjectCommands,

    /// Output directory name, relative to the source file's directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compile_out_dir: Option<String>,

    /// Project command type used when none is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_default_command: Option<String>,
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Config file directly inside `dir`, dotted name first
    pub fn config_file_in(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Output directory name, falling back to `out` when unset or empty
    pub fn compile_out_dir_name(&self) -> &str {
        match self.compile_out_dir.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_COMPILE_OUT_DIR,
        }
    }

    /// Default project command type, falling back to `npm` when unset or empty
    pub fn default_project_command(&self) -> &str {
        match self.project_default_command.as_deref() {
            Some(command) if !command.is_empty() => command,
            _ => DEFAULT_PROJECT_COMMAND,
        }
    }

    /// Overlay a more specific config on top of this one.
    ///
    /// Map entries are replaced key by key; scalars are replaced only when
    /// `other` sets them.
    pub fn merge(&mut self, other: Config) {
        self.run_commands.extend(other.run_commands);
        self.compile_commands.extend(other.compile_commands);
        self.project_commands.extend(other.project_commands);

        if other.compile_out_dir.is_some() {
            self.compile_out_dir = other.compile_out_dir;
        }
        if other.project_default_command.is_some() {
            self.project_default_command = other.project_default_command;
        }
    }
}
