//! Atomic JSON file operations.
//!
//! Provides a thin typed layer over [`write_atomically`] for JSON documents.

use super::atomic_file::{FileLock, write_atomically};
use serde::{Serialize, de::DeserializeOwned};
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thinker_core::ThinkerError;

/// Errors that can occur during atomic JSON operations.
#[derive(Debug)]
pub enum AtomicJsonError {
    /// File I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for AtomicJsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicJsonError::IoError(e) => write!(f, "I/O error: {}", e),
            AtomicJsonError::JsonError(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for AtomicJsonError {}

impl From<std::io::Error> for AtomicJsonError {
    fn from(e: std::io::Error) -> Self {
        AtomicJsonError::IoError(e)
    }
}

impl From<serde_json::Error> for AtomicJsonError {
    fn from(e: serde_json::Error) -> Self {
        AtomicJsonError::JsonError(e)
    }
}

impl From<AtomicJsonError> for ThinkerError {
    fn from(e: AtomicJsonError) -> Self {
        match e {
            AtomicJsonError::IoError(e) => e.into(),
            AtomicJsonError::JsonError(e) => e.into(),
        }
    }
}

/// A handle to a JSON file that is always replaced as a whole.
///
/// Documents are written pretty-printed (two-space indent, non-ASCII kept
/// verbatim) through a temp file and an atomic rename.
pub struct AtomicJsonFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicJsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a new atomic JSON file handle.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the JSON file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the JSON file and deserializes it.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or holds only whitespace
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>, AtomicJsonError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = serde_json::from_str(&content)?;
        Ok(Some(data))
    }

    /// Saves data to the JSON file atomically.
    ///
    /// `data` may be any value with the same serialized shape as `T`, such as
    /// a slice when `T` is a `Vec`.
    pub fn save<S>(&self, data: &S) -> Result<(), AtomicJsonError>
    where
        S: Serialize + ?Sized,
    {
        let json = serde_json::to_string_pretty(data)?;
        write_atomically(&self.path, json.as_bytes())?;
        Ok(())
    }

    /// Acquires an exclusive lock for read-modify-write cycles on this file.
    ///
    /// Returns a guard that releases the lock when dropped.
    pub fn lock(&self) -> Result<FileLock, AtomicJsonError> {
        Ok(FileLock::acquire(&self.path)?)
    }

    /// Performs a locked load-modify-save cycle.
    ///
    /// The update function receives the current data (or `default_value` if
    /// the file doesn't exist). If it returns `Ok(())`, the changes are
    /// atomically written back.
    pub fn update<F>(&self, default_value: T, f: F) -> Result<(), AtomicJsonError>
    where
        F: FnOnce(&mut T) -> Result<(), AtomicJsonError>,
    {
        let _lock = self.lock()?;
        let mut data = self.load()?.unwrap_or(default_value);
        f(&mut data)?;
        self.save(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestState {
        name: String,
        count: u32,
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let atomic_file = AtomicJsonFile::<TestState>::new(temp_dir.path().join("test.json"));

        let state = TestState {
            name: "Zürich ✓".to_string(),
            count: 42,
        };
        atomic_file.save(&state).unwrap();

        let raw = fs::read_to_string(atomic_file.path()).unwrap();
        assert!(raw.contains("\n  \"name\": \"Zürich ✓\""));

        let loaded = atomic_file.load().unwrap().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let atomic_file = AtomicJsonFile::<TestState>::new(temp_dir.path().join("missing.json"));
        assert!(atomic_file.load().unwrap().is_none());
    }

    #[test]
    fn test_load_blank_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blank.json");
        fs::write(&path, "  \n").unwrap();
        let atomic_file = AtomicJsonFile::<TestState>::new(path);
        assert!(atomic_file.load().unwrap().is_none());
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{\"name\": ").unwrap();
        let atomic_file = AtomicJsonFile::<TestState>::new(path);

        let err = atomic_file.load().unwrap_err();
        assert!(matches!(err, AtomicJsonError::JsonError(_)));
        assert!(ThinkerError::from(err).is_persistence());
    }

    #[test]
    fn test_update() {
        let temp_dir = TempDir::new().unwrap();
        let atomic_file = AtomicJsonFile::<TestState>::new(temp_dir.path().join("test.json"));
        let default_state = TestState {
            name: "default".to_string(),
            count: 0,
        };

        // Update (creates new file with default)
        atomic_file
            .update(default_state.clone(), |state| {
                state.count += 10;
                Ok(())
            })
            .unwrap();
        atomic_file
            .update(default_state, |state| {
                state.count += 5;
                Ok(())
            })
            .unwrap();

        let loaded = atomic_file.load().unwrap().unwrap();
        assert_eq!(loaded.count, 15);
    }
}
