use std::io;

/// Errors that can occur while resolving or preparing a command
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No command configured for language '{language}'")]
    CommandNotFound { language: String },

    #[error("No project command configured for '{command_type}'")]
    ProjectCommandNotFound { command_type: String },

    #[error("No workspace folder is open")]
    NoWorkspace,

    #[error("This command requires an open file")]
    FileRequired,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether the error comes from missing configuration or missing editor
    /// context rather than from the filesystem or a malformed config file.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::CommandNotFound { .. }
                | Error::ProjectCommandNotFound { .. }
                | Error::NoWorkspace
                | Error::FileRequired
        )
    }
}

/// Result type alias for file-runner operations
pub type Result<T> = std::result::Result<T, Error>;
