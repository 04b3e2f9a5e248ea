use file_runner_core::FileSystem;
use std::io;
use std::path::Path;
use tracing::debug;

/// Filesystem used for dry runs: reports directories instead of touching them
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewFileSystem;

impl FileSystem for PreviewFileSystem {
    fn ensure_dir(&self, path: &Path) -> io::Result<()> {
        debug!("Dry run: would create {:?}", path);
        Ok(())
    }

    fn remove_dir_recursive(&self, path: &Path) -> io::Result<bool> {
        debug!("Dry run: would remove {:?}", path);
        Ok(path.is_dir())
    }
}
