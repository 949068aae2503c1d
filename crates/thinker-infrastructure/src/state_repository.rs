//! Selection state persisted between runs.
//!
//! The session data file has no notion of a current session, so the id of
//! the selected session is kept in a small sibling file
//! (`thoughts.json` → `thoughts.state.json`).

use crate::storage::AtomicJsonFile;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thinker_core::Store;
use thinker_core::error::Result;

/// State that persists across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    /// Id of the session that was current when the last run ended
    #[serde(default)]
    pub current_session_id: Option<String>,
}

/// Reads and writes [`SelectionState`] next to a data file.
pub struct JsonStateRepository {
    file: AtomicJsonFile<SelectionState>,
}

impl JsonStateRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: AtomicJsonFile::new(path.into()),
        }
    }

    /// Creates the repository for the state file belonging to `data_file`.
    pub fn for_data_file(data_file: &Path) -> Self {
        Self::new(state_file_for(data_file))
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Loads the state; a missing file means nothing is selected.
    pub fn load(&self) -> Result<SelectionState> {
        Ok(self.file.load()?.unwrap_or_default())
    }

    /// Records `session_id` (or no selection) as current.
    pub fn set_current_session(&self, session_id: Option<&str>) -> Result<()> {
        let session_id = session_id.map(str::to_string);
        self.file.update(SelectionState::default(), |state| {
            state.current_session_id = session_id;
            Ok(())
        })?;
        Ok(())
    }

    /// Re-selects the saved session in `store`, if it still exists.
    ///
    /// Unreadable state files and ids of sessions that were deleted since are
    /// ignored; the store is then left with no selection.
    pub fn restore_selection(&self, store: &mut Store) {
        let state = match self.load() {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("Ignoring unreadable state file {:?}: {}", self.path(), e);
                return;
            }
        };

        if let Some(session_id) = state.current_session_id {
            if store.select_session(&session_id).is_err() {
                tracing::debug!("Saved session '{}' no longer exists", session_id);
            }
        }
    }
}

/// `dir/thoughts.json` → `dir/thoughts.state.json`.
pub fn state_file_for(data_file: &Path) -> PathBuf {
    let stem = data_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "thoughts".to_string());
    data_file.with_file_name(format!("{}.state.json", stem))
}
