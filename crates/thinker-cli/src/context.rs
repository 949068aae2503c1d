//! Per-invocation wiring: configuration, repositories and the store.

use anyhow::{Context, Result, bail};
use colored::Colorize;
use std::path::{Path, PathBuf};
use thinker_core::config::ThinkerConfig;
use thinker_core::{LoadOutcome, Store};
use thinker_infrastructure::{ConfigService, JsonSessionRepository, JsonStateRepository};

/// Everything a command needs to reach the user's data.
pub struct AppContext {
    pub config: ThinkerConfig,
    repository: JsonSessionRepository,
    state: JsonStateRepository,
    session_override: Option<String>,
}

impl AppContext {
    /// Resolves configuration and file locations.
    ///
    /// `data_file` takes precedence over the configured data file.
    pub fn new(
        config_path: Option<&Path>,
        data_file: Option<PathBuf>,
        session_override: Option<String>,
    ) -> Result<Self> {
        let service = ConfigService::locate(config_path)?;
        let config = service
            .load()
            .with_context(|| format!("Failed to load config from {:?}", service.path()))?;

        let data_file = data_file.unwrap_or_else(|| config.data_file.clone());
        tracing::debug!("Using data file {:?}", data_file);

        Ok(Self {
            state: JsonStateRepository::for_data_file(&data_file),
            repository: JsonSessionRepository::new(data_file),
            config,
            session_override,
        })
    }

    pub fn data_file(&self) -> &Path {
        self.repository.path()
    }

    /// Loads the store with the selection restored, for read-only commands.
    pub fn read(&self) -> Result<Store> {
        let (store, outcome) = self.open()?;
        if let LoadOutcome::Reset { error } = outcome {
            eprintln!(
                "{}",
                format!(
                    "Warning: could not read {:?} ({}); showing no sessions.",
                    self.data_file(),
                    error
                )
                .yellow()
            );
        }
        Ok(store)
    }

    /// Whether `--session` chose the session for this invocation only.
    pub fn has_session_override(&self) -> bool {
        self.session_override.is_some()
    }

    /// Runs `f` against the store under the data file lock and saves the
    /// result.
    ///
    /// The selection is persisted too, unless `--session` chose the session
    /// for this invocation only.
    pub fn mutate<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Store) -> thinker_core::Result<T>,
    {
        let _lock = self
            .repository
            .lock()
            .with_context(|| format!("Failed to lock {:?}", self.data_file()))?;

        let (mut store, outcome) = self.open()?;
        if let LoadOutcome::Reset { error } = outcome {
            bail!(
                "Refusing to overwrite {:?}, which could not be read ({}). Fix or move the file first.",
                self.data_file(),
                error
            );
        }
        let value = f(&mut store)?;

        store
            .save(&self.repository)
            .with_context(|| format!("Failed to save {:?}", self.data_file()))?;
        if self.session_override.is_none() {
            self.state
                .set_current_session(store.current_session_id())
                .context("Failed to save selected session")?;
        }
        Ok(value)
    }

    fn open(&self) -> Result<(Store, LoadOutcome)> {
        let (mut store, outcome) = self.repository.open_store();
        match &self.session_override {
            Some(session_id) => {
                store.select_session(session_id)?;
            }
            None => self.state.restore_selection(&mut store),
        }
        Ok((store, outcome))
    }
}
