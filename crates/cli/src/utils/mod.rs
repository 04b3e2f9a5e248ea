pub mod language;
pub mod path;
pub mod preview_fs;

pub use language::detect_language_id;
pub use path::{resolve_path, resolve_workspace};
pub use preview_fs::PreviewFileSystem;
