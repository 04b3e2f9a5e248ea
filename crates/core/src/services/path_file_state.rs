//! File state provider for hosts that pass the file explicitly

use crate::interfaces::{ActiveFile, FileStateProvider};
use crate::types::PathInfo;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct PathFileState {
    active: Option<ActiveFile>,
    workspace: Option<PathBuf>,
}

impl PathFileState {
    /// State with `path` open as `language_id`.
    ///
    /// A path without a file name leaves no active file.
    pub fn new(path: &Path, language_id: impl Into<String>) -> Self {
        let active = PathInfo::from_path(path).map(|path| ActiveFile {
            language_id: language_id.into(),
            path,
        });
        Self {
            active,
            workspace: None,
        }
    }

    /// State with nothing open
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_workspace(mut self, workspace: impl Into<PathBuf>) -> Self {
        self.workspace = Some(workspace.into());
        self
    }
}

impl FileStateProvider for PathFileState {
    fn active_file(&self) -> Option<ActiveFile> {
        self.active.clone()
    }

    fn workspace_root(&self) -> Option<PathBuf> {
        self.workspace.clone()
    }
}
