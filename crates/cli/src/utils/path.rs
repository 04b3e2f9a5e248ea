use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Absolute form of a command-line path. The path does not have to exist.
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    std::path::absolute(Path::new(path))
        .with_context(|| format!("Failed to resolve path {path}"))
}

/// Workspace root from the `--workspace` flag, or the current directory
pub fn resolve_workspace(workspace: Option<&str>) -> Result<PathBuf> {
    match workspace {
        Some(dir) => resolve_path(dir),
        None => std::env::current_dir().context("Failed to get current directory"),
    }
}
