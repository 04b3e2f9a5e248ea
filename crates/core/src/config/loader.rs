//! Configuration loading
//!
//! Config files are looked up from the file's directory upwards. Every file
//! found is merged, the closest one winning.

use std::path::{Path, PathBuf};

use super::Config;
use crate::error::Result;

/// Environment variable naming a single config file to use instead of the lookup
pub const CONFIG_ENV_VAR: &str = "RUNNER_CONFIG";

/// Config file names checked in every directory, in priority order
pub const CONFIG_FILE_NAMES: [&str; 2] = [".file-runner.json", "file-runner.json"];

/// Source of configuration snapshots
pub trait ConfigProvider {
    /// Produce a fresh snapshot for one invocation
    fn snapshot(&self) -> Result<Config>;
}

impl ConfigProvider for Config {
    fn snapshot(&self) -> Result<Config> {
        Ok(self.clone())
    }
}

/// File-backed configuration provider
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    start: PathBuf,
    explicit: Option<PathBuf>,
    boundary: Option<PathBuf>,
}

impl ConfigLoader {
    /// Lookup starting at `start` (a file or a directory) with no boundary
    pub fn new(start: impl Into<PathBuf>) -> Self {
        Self {
            start: start.into(),
            explicit: None,
            boundary: None,
        }
    }

    /// Lookup honouring `RUNNER_CONFIG` and stopping at `$HOME`
    pub fn from_env(start: impl Into<PathBuf>) -> Self {
        let mut loader = Self::new(start);
        loader.explicit = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        loader.boundary = std::env::var_os("HOME").map(PathBuf::from);
        loader
    }

    /// Load only this file
    pub fn with_explicit_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit = Some(path.into());
        self
    }

    /// Do not look above this directory
    pub fn with_boundary(mut self, dir: impl Into<PathBuf>) -> Self {
        self.boundary = Some(dir.into());
        self
    }

    pub fn load(&self) -> Result<Config> {
        if let Some(ref path) = self.explicit {
            tracing::debug!("Loading explicit config from {:?}", path);
            return Config::load_from_file(path);
        }

        let files = self.discover();
        if files.is_empty() {
            tracing::debug!("No config files found from {:?}, using defaults", self.start);
            return Ok(Config::default());
        }

        tracing::debug!("Found {} config files to merge", files.len());
        let mut merged = Config::default();
        // Least specific first so closer files override
        for path in files.iter().rev() {
            tracing::debug!("Merging config from {:?}", path);
            merged.merge(Config::load_from_file(path)?);
        }
        Ok(merged)
    }

    /// Files `load` reads, closest first
    pub fn sources(&self) -> Vec<PathBuf> {
        match self.explicit {
            Some(ref path) => vec![path.clone()],
            None => self.discover(),
        }
    }

    /// Config files from the closest directory outwards
    pub fn discover(&self) -> Vec<PathBuf> {
        let mut check_path: &Path = if self.start.is_file() {
            self.start.parent().unwrap_or(&self.start)
        } else {
            &self.start
        };

        let mut found = Vec::new();
        loop {
            if let Some(path) = Config::config_file_in(check_path) {
                found.push(path);
            } else {
                tracing::trace!("No config at {:?}", check_path);
            }

            if self.boundary.as_deref() == Some(check_path) {
                break;
            }

            match check_path.parent() {
                Some(parent) => check_path = parent,
                None => break,
            }
        }
        found
    }
}

impl ConfigProvider for ConfigLoader {
    fn snapshot(&self) -> Result<Config> {
        self.load()
    }
}
