//! JSON-file SessionRepository implementation.

use crate::storage::{AtomicJsonFile, FileLock};
use std::path::{Path, PathBuf};
use thinker_core::error::Result;
use thinker_core::{LoadOutcome, Session, SessionRepository, Store};

/// Stores every session in one JSON file.
///
/// The file holds a top-level array of session objects in insertion order,
/// each with its thoughts nested:
///
/// ```text
/// [
///   {
///     "id": "5e55104a",
///     "title": "Website Redesign Project",
///     "description": "",
///     "thoughts": [ { "id": ..., "content": ..., "category": ..., "priority": 4,
///                     "tags": [...], "created_at": ..., "updated_at": ...,
///                     "is_completed": false } ],
///     "created_at": "2024-03-02T10:14:59.000001",
///     "updated_at": "2024-03-02T10:15:00.100000"
///   }
/// ]
/// ```
pub struct JsonSessionRepository {
    file: AtomicJsonFile<Vec<Session>>,
}

impl JsonSessionRepository {
    /// Creates a repository backed by the file at `path`.
    ///
    /// Nothing is read or created until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: AtomicJsonFile::new(path.into()),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Acquires the exclusive lock that serializes load-modify-save cycles
    /// across processes sharing this data file.
    pub fn lock(&self) -> Result<FileLock> {
        Ok(self.file.lock()?)
    }

    /// Loads a fresh `Store` from this file, logging the outcome.
    ///
    /// A corrupt file yields an empty store; the returned outcome carries the
    /// error so the caller can tell the user their data was not loaded.
    pub fn open_store(&self) -> (Store, LoadOutcome) {
        let mut store = Store::new();
        let outcome = store.load(self);
        match &outcome {
            LoadOutcome::Loaded { sessions } => {
                tracing::debug!("Loaded {} session(s) from {:?}", sessions, self.path());
            }
            LoadOutcome::Missing => {
                tracing::debug!("No data file at {:?}, starting empty", self.path());
            }
            LoadOutcome::Reset { error } => {
                tracing::warn!(
                    "Discarded unreadable data file {:?}, starting empty: {}",
                    self.path(),
                    error
                );
            }
        }
        (store, outcome)
    }
}

impl SessionRepository for JsonSessionRepository {
    fn load_all(&self) -> Result<Option<Vec<Session>>> {
        tracing::debug!("Reading sessions from {:?}", self.path());
        Ok(self.file.load()?)
    }

    fn save_all(&self, sessions: &[Session]) -> Result<()> {
        self.file.save(sessions)?;
        tracing::info!("Saved {} session(s) to {:?}", sessions.len(), self.path());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use thinker_core::{ThoughtDraft, ThoughtFilter};

    const LEGACY_FILE: &str = r#"[
  {
    "id": "1f3a9c2e",
    "title": "Today's Goals",
    "description": "Daily tasks and objectives to accomplish",
    "thoughts": [
      {
        "id": "7b0d4e11",
        "content": "Review and respond to emails",
        "category": "communication",
        "priority": 4,
        "tags": [
          "email",
          "admin"
        ],
        "created_at": "2024-06-10T08:00:01.512345",
        "updated_at": "2024-06-10T08:00:01.512345",
        "is_completed": false
      },
      {
        "id": "c2e81f00",
        "content": "Complete project proposal",
        "category": "work",
        "priority": 5,
        "tags": [
          "deadline",
          "important"
        ],
        "created_at": "2024-06-10T08:00:01.612345",
        "updated_at": "2024-06-10T09:12:44.000100",
        "is_completed": true
      }
    ],
    "created_at": "2024-06-10T08:00:00.000001",
    "updated_at": "2024-06-10T09:12:44.000100"
  }
]"#;

    #[test]
    fn test_missing_file_is_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonSessionRepository::new(temp_dir.path().join("thoughts.json"));

        let (store, outcome) = repository.open_store();
        assert_eq!(outcome, LoadOutcome::Missing);
        assert!(store.sessions().is_empty());
    }

    #[test]
    fn test_reads_existing_data_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("thoughts.json");
        fs::write(&path, LEGACY_FILE).unwrap();

        let (mut store, outcome) = JsonSessionRepository::new(&path).open_store();
        assert_eq!(outcome, LoadOutcome::Loaded { sessions: 1 });

        let session = store.select_session("1f3a9c2e").unwrap();
        assert_eq!(session.title(), "Today's Goals");
        assert_eq!(session.completed_count(), 1);

        let open = store.list_thoughts(&ThoughtFilter::new().completed(false)).unwrap();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].tags(), ["email", "admin"]);
    }

    #[test]
    fn test_rewrites_data_file_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("thoughts.json");
        fs::write(&path, LEGACY_FILE).unwrap();
        let repository = JsonSessionRepository::new(&path);

        let (store, _) = repository.open_store();
        store.save(&repository).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), LEGACY_FILE);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonSessionRepository::new(temp_dir.path().join("data").join("thoughts.json"));

        let mut store = Store::new();
        store.create_session("Ideas", "brainstorm ✨").unwrap();
        store
            .add_thought(
                ThoughtDraft::new("Write a novel")
                    .with_category("dreams")
                    .with_priority(5)
                    .with_tags(["long-term", "writing", "long-term"]),
            )
            .unwrap();
        let id = store
            .add_thought(ThoughtDraft::new("Call the plumber").with_priority(1))
            .unwrap()
            .id()
            .to_string();
        store.complete_thought(&id).unwrap();
        store.create_session("Empty", "").unwrap();
        store.save(&repository).unwrap();

        let (reloaded, outcome) = repository.open_store();
        assert_eq!(outcome, LoadOutcome::Loaded { sessions: 2 });
        assert_eq!(reloaded.sessions(), store.sessions());
    }

    #[test]
    fn test_malformed_file_resets_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("thoughts.json");
        fs::write(&path, "[{\"id\": \"broken\", ").unwrap();

        let (store, outcome) = JsonSessionRepository::new(&path).open_store();
        assert!(store.sessions().is_empty());
        match outcome {
            LoadOutcome::Reset { error } => assert!(error.is_persistence()),
            other => panic!("unexpected outcome: {other:?}"),
        }
        // The corrupt file is left for the user to inspect
        assert!(path.exists());
    }

    #[test]
    fn test_missing_field_resets_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("thoughts.json");
        fs::write(&path, r#"[{"id": "a", "title": "No thoughts key", "description": "",
            "created_at": "2024-01-01T00:00:00", "updated_at": "2024-01-01T00:00:00"}]"#)
            .unwrap();

        let (store, outcome) = JsonSessionRepository::new(&path).open_store();
        assert!(store.sessions().is_empty());
        assert!(matches!(outcome, LoadOutcome::Reset { .. }));
    }

    #[test]
    fn test_out_of_range_priority_is_clamped_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("thoughts.json");
        fs::write(&path, LEGACY_FILE.replace("\"priority\": 5", "\"priority\": 7")).unwrap();
        let repository = JsonSessionRepository::new(&path);

        let (mut store, outcome) = repository.open_store();
        assert_eq!(outcome, LoadOutcome::Loaded { sessions: 1 });
        store.select_session("1f3a9c2e").unwrap();
        assert_eq!(store.add_thought(ThoughtDraft::new("Later note")).unwrap().priority().value(), 3);
        store.save(&repository).unwrap();

        // Both the clamped record and the other session data survive a save
        let (reloaded, _) = repository.open_store();
        let session = reloaded.session("1f3a9c2e").unwrap();
        assert_eq!(session.title(), "Today's Goals");
        assert_eq!(session.thought("c2e81f00").unwrap().priority().value(), 5);
        assert_eq!(session.thoughts().len(), 3);
    }

    #[test]
    fn test_non_integer_priority_resets_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("thoughts.json");
        fs::write(&path, LEGACY_FILE.replace("\"priority\": 5", "\"priority\": \"high\"")).unwrap();

        let (store, outcome) = JsonSessionRepository::new(&path).open_store();
        assert!(store.sessions().is_empty());
        assert!(matches!(outcome, LoadOutcome::Reset { .. }));
    }

    #[test]
    fn test_save_failure_is_persistence_error() {
        let temp_dir = TempDir::new().unwrap();
        // A directory in place of the data file cannot be replaced
        let path = temp_dir.path().join("thoughts.json");
        fs::create_dir(&path).unwrap();

        let err = Store::new()
            .save(&JsonSessionRepository::new(&path))
            .unwrap_err();
        assert!(err.is_persistence());
    }
}
