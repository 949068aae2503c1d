//! Writes rendered session reports to disk.

use crate::storage::write_atomically;
use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};
use thinker_core::error::Result;
use thinker_core::export::export_file_name;
use thinker_core::{ExportFormat, Session};

/// Exports `session` into `dir` under a timestamped file name and returns the
/// path written.
pub fn write_export(dir: &Path, session: &Session, format: ExportFormat) -> Result<PathBuf> {
    write_export_at(dir, session, format, Local::now().naive_local())
}

/// Like [`write_export`], with the timestamp used in the file name given.
///
/// An existing file with the same name is replaced.
pub fn write_export_at(
    dir: &Path,
    session: &Session,
    format: ExportFormat,
    at: NaiveDateTime,
) -> Result<PathBuf> {
    let path = dir.join(export_file_name(session, format, at));
    let report = format.render(session);
    write_atomically(&path, report.as_bytes())?;
    tracing::info!("Exported session '{}' to {:?}", session.id(), path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;
    use thinker_core::{Store, ThoughtDraft};

    fn sample_store() -> Store {
        let mut store = Store::new();
        store.create_session("Trip", "Packing list").unwrap();
        store
            .add_thought(ThoughtDraft::new("Passport").with_category("documents").with_priority(5))
            .unwrap();
        store
    }

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 2)
            .and_then(|d| d.and_hms_opt(9, 5, 7))
            .unwrap()
    }

    #[test]
    fn test_write_markdown_export() {
        let temp_dir = TempDir::new().unwrap();
        let store = sample_store();
        let session = store.current_session().unwrap();

        let path = write_export_at(temp_dir.path(), session, ExportFormat::Markdown, at()).unwrap();

        let expected_name = format!("thinking_session_{}_20240302_090507.md", session.id());
        assert_eq!(path, temp_dir.path().join(expected_name));
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, thinker_core::export_markdown(session));
        assert!(written.starts_with("# Trip\n"));
    }

    #[test]
    fn test_write_text_export_creates_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("exports");
        let store = sample_store();
        let session = store.current_session().unwrap();

        let path = write_export(&dir, session, ExportFormat::Text).unwrap();

        assert!(path.starts_with(&dir));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("txt"));
        assert!(fs::read_to_string(&path).unwrap().contains("[ ] Passport"));
    }
}
