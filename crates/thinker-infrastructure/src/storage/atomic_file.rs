//! Whole-file replace and advisory locking primitives.

use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};

/// Writes `bytes` to `path` so that readers see either the old file or the
/// complete new one, never a partial write.
///
/// Provides:
/// - **Atomicity**: data goes to a hidden temp file in the same directory,
///   which is then renamed over the target
/// - **Durability**: the temp file is fsynced before the rename
///
/// The temp file is removed if any step fails.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> io::Result<()> {
    ensure_parent_dir(path)?;

    let tmp_path = temp_path(path)?;
    let result = write_and_rename(&tmp_path, path, bytes);
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn write_and_rename(tmp_path: &Path, path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut tmp_file = File::create(tmp_path)?;
    tmp_file.write_all(bytes)?;
    tmp_file.sync_all()?;
    drop(tmp_file);

    fs::rename(tmp_path, path)
}

/// Gets the hidden sibling path used for `suffix` files, e.g. `.data.json.tmp`.
pub(crate) fn sibling_path(path: &Path, suffix: &str) -> io::Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "Path has no file name")
    })?;
    let sibling = format!(".{}.{}", file_name.to_string_lossy(), suffix);
    Ok(match path.parent() {
        Some(parent) => parent.join(sibling),
        None => PathBuf::from(sibling),
    })
}

fn temp_path(path: &Path) -> io::Result<PathBuf> {
    sibling_path(path, "tmp")
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// An exclusive advisory lock guarding a data file.
///
/// The lock is held on a hidden `.<name>.lock` sibling and released when the
/// guard is dropped. The lock file itself is left in place so that every
/// process locks the same inode.
#[derive(Debug)]
pub struct FileLock {
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    /// Blocks until an exclusive lock for `path` is acquired.
    pub fn acquire(path: &Path) -> io::Result<Self> {
        ensure_parent_dir(path)?;
        let lock_path = sibling_path(path, "lock")?;

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;
        file.lock_exclusive()?;

        Ok(Self { file, lock_path })
    }

    pub fn lock_path(&self) -> &Path {
        &self.lock_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock also happens when the handle closes; this just makes it explicit
        let _ = FileExt::unlock(&self.file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomically_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");

        write_atomically(&path, b"first").unwrap();
        write_atomically(&path, b"second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        // Verify no temp file left behind
        assert!(!temp_dir.path().join(".notes.txt.tmp").exists());
    }

    #[test]
    fn test_write_atomically_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("deeper").join("out.md");

        write_atomically(&path, b"# Title").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_failed_write_cleans_up_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        // Renaming a file over a non-empty directory fails on every platform
        let target = temp_dir.path().join("occupied");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), b"x").unwrap();

        assert!(write_atomically(&target, b"data").is_err());
        assert!(!temp_dir.path().join(".occupied.tmp").exists());
    }

    #[test]
    fn test_sibling_path_for_bare_file_name() {
        let sibling = sibling_path(Path::new("thoughts.json"), "lock").unwrap();
        assert_eq!(sibling, PathBuf::from(".thoughts.json.lock"));
    }

    #[test]
    fn test_lock_can_be_reacquired_after_drop() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("thoughts.json");

        let lock = FileLock::acquire(&path).unwrap();
        assert!(lock.lock_path().ends_with(".thoughts.json.lock"));
        drop(lock);

        let again = FileLock::acquire(&path).unwrap();
        assert!(again.lock_path().exists());
    }
}
