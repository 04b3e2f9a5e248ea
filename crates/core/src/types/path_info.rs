use serde::Serialize;
use std::path::{Path, PathBuf};

/// Path facts about the file being run, derived fresh on every invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathInfo {
    /// Directory containing the file
    pub dir: PathBuf,
    /// Full path to the file
    pub file_path: PathBuf,
    /// File name including its extension
    pub filename: String,
}

impl PathInfo {
    /// Split a file path into its directory and file name.
    ///
    /// Returns `None` for paths without a file name component (`/`, `..`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let filename = path.file_name()?.to_string_lossy().into_owned();
        let dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Some(Self {
            dir,
            file_path: path.to_path_buf(),
            filename,
        })
    }

    /// The file name without its final extension
    pub fn stem(&self) -> &str {
        crate::compose::output_name(&self.filename)
    }
}
