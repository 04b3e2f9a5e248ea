//! Configuration management for file-runner

mod loader;
mod settings;

// Re-export main types
pub use loader::{CONFIG_ENV_VAR, CONFIG_FILE_NAMES, ConfigLoader, ConfigProvider};
pub use settings::{
    CompileCommands, Config, DEFAULT_COMPILE_OUT_DIR, DEFAULT_PROJECT_COMMAND, ProjectCommands,
    RunCommands,
};
