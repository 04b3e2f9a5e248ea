//! Default implementations of the collaborator interfaces

pub mod path_file_state;
pub mod shell_executor;
pub mod std_file_system;

pub use path_file_state::PathFileState;
pub use shell_executor::ShellExecutor;
pub use std_file_system::StdFileSystem;
