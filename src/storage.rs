use crate::error::StorageError;
use crate::models::{EntryId, JournalEntry, JournalRecord};
use std::fs;
use std::io;
use std::path::Path;

/// Outcome of reading the journal file.
#[derive(Debug)]
pub enum Loaded {
    Entries(Vec<JournalEntry>),
    /// No file at the configured path; the calendar opens empty.
    Missing,
}

/// Reads the journal JSON array. Entry ids follow file order.
pub fn load_entries(path: &Path) -> Result<Loaded, StorageError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::info!(?path, "no journal file");
            return Ok(Loaded::Missing);
        }
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let entries = parse_entries(&content).map_err(|source| StorageError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(?path, count = entries.len(), "loaded journal");
    Ok(Loaded::Entries(entries))
}

pub fn parse_entries(content: &str) -> Result<Vec<JournalEntry>, serde_json::Error> {
    let records: Vec<JournalRecord> = serde_json::from_str(content)?;
    Ok(records
        .into_iter()
        .enumerate()
        .map(|(i, record)| JournalEntry::from_record(EntryId(i), record))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_journal_dir() -> PathBuf {
        let mut dir = std::env::temp_dir();
        let stamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        dir.push(format!("journal-cal-test-{}-{}", std::process::id(), stamp));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn loads_entries_in_file_order() {
        let dir = temp_journal_dir();
        let path = dir.join("journal.json");
        fs::write(
            &path,
            r#"[
                {"date": "02/03/2024", "imgUrl": "b.jpg", "rating": 3.5,
                 "categories": ["trim"], "description": "second day"},
                {"date": "01/03/2024", "imgUrl": "a.jpg", "rating": 5,
                 "categories": ["wash", "oil", "braid"], "description": "first day"}
            ]"#,
        )
        .expect("write journal");

        let Loaded::Entries(entries) = load_entries(&path).expect("load") else {
            panic!("expected entries");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, EntryId(0));
        assert_eq!(entries[0].date, "02/03/2024");
        assert_eq!(entries[1].id, EntryId(1));
        assert_eq!(entries[1].categories.len(), 3);
        assert_eq!(entries[1].rating, 5.0);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = temp_journal_dir();
        let result = load_entries(&dir.join("nope.json")).expect("missing is ok");
        assert!(matches!(result, Loaded::Missing));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn malformed_json_is_reported() {
        let dir = temp_journal_dir();
        let path = dir.join("journal.json");
        fs::write(&path, "[{\"date\": ").expect("write journal");
        assert!(matches!(load_entries(&path), Err(StorageError::Json { .. })));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn optional_fields_default() {
        let entries = parse_entries(r#"[{"date": "01/01/2024"}]"#).expect("parse");
        assert_eq!(entries[0].img_url, "");
        assert!(entries[0].categories.is_empty());
        assert_eq!(entries[0].rating, 0.0);
    }
}
