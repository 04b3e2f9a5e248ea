//! file-runner - Resolve and prepare "run current file" / "run project" commands
//!
//! This crate provides functionality to:
//! - Look up user-configured command templates by language or project command type
//! - Substitute the `<file>`, `<outDir>`, `<out>` and `<workspace>` placeholders
//! - Compose compile and run steps for languages that need a build first
//! - Hand finished commands to a pluggable execution collaborator
pub mod compose;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod resolver;
pub mod runner;
pub mod services;
pub mod template;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use compose::{compile_out_dir, compose_compile_and_run, output_name};
pub use config::{Config, ConfigLoader, ConfigProvider};
pub use interfaces::{ActiveFile, ExecutionRequest, Executor, FileStateProvider, FileSystem};
pub use resolver::{CommandResolver, Resolution};
pub use runner::{ClearOutcome, ProjectCommandEntry, Runner};
pub use template::{Bindings, Placeholder, substitute};
