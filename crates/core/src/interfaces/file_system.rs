//! Filesystem interface
//!
//! Kept behind a trait so the composer can be exercised without touching disk.

use std::io;
use std::path::Path;

/// Directory operations needed for compile output handling
pub trait FileSystem: Send + Sync {
    /// Create `path` and any missing parents. Existing directories are fine.
    fn ensure_dir(&self, path: &Path) -> io::Result<()>;

    /// Delete the immediate children of `path`, then `path` itself.
    ///
    /// Returns `Ok(false)` when the directory does not exist.
    fn remove_dir_recursive(&self, path: &Path) -> io::Result<bool>;
}
