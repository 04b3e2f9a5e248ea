//! Collaborator interfaces
//!
//! The resolution core only builds command strings. Everything that touches
//! the host (which file is active, the filesystem, running processes) is
//! reached through these traits.

pub mod executor;
pub mod file_state;
pub mod file_system;

pub use executor::{ExecutionRequest, Executor};
pub use file_state::{ActiveFile, FileStateProvider};
pub use file_system::FileSystem;
