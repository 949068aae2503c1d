//! Configuration loading.
//!
//! Reads [`ThinkerConfig`] from a TOML file, by default
//! `~/.config/thinker/config.toml`.

use crate::paths::ThinkerPaths;
use std::fs;
use std::path::{Path, PathBuf};
use thinker_core::config::ThinkerConfig;
use thinker_core::error::{Result, ThinkerError};

/// Loads the configuration from one TOML file.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses `path` when given, else the platform default location.
    pub fn locate(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Ok(Self::new(path)),
            None => ThinkerPaths::config_file()
                .map(Self::new)
                .map_err(|e| ThinkerError::persistence(e.to_string())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the configuration.
    ///
    /// A missing file yields [`ThinkerConfig::default`]; an unreadable or
    /// malformed file is an error rather than being silently ignored.
    pub fn load(&self) -> Result<ThinkerConfig> {
        if !self.path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", self.path);
            return Ok(ThinkerConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let config: ThinkerConfig = toml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", self.path);
        Ok(config)
    }
}
