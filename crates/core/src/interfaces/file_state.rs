use std::path::PathBuf;

use crate::types::PathInfo;

/// The file the user is working on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFile {
    /// Raw language id as reported by the host, before alias normalization
    pub language_id: String,
    pub path: PathInfo,
}

/// Host view of the current editor state
pub trait FileStateProvider {
    /// The active file, or `None` when nothing is open
    fn active_file(&self) -> Option<ActiveFile>;

    /// Root of the open workspace, if any
    fn workspace_root(&self) -> Option<PathBuf> {
        None
    }
}
