//! Filesystem implementation backed by `std::fs`

use crate::interfaces::FileSystem;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl StdFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for StdFileSystem {
    fn ensure_dir(&self, path: &Path) -> io::Result<()> {
        if !path.is_dir() {
            debug!("Creating directory {:?}", path);
        }
        fs::create_dir_all(path)
    }

    fn remove_dir_recursive(&self, path: &Path) -> io::Result<bool> {
        if !path.exists() {
            return Ok(false);
        }

        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let child = entry.path();
            if entry.file_type()?.is_dir() {
                fs::remove_dir_all(&child)?;
            } else {
                fs::remove_file(&child)?;
            }
        }
        fs::remove_dir(path)?;
        debug!("Removed directory {:?}", path);
        Ok(true)
    }
}
