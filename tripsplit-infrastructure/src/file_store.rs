use indexmap::IndexMap;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tripsplit_application::{KeyValueStore, StoreError};

/// Key-value store kept as a single JSON object on disk.
///
/// A missing file reads as an empty store. Writes replace the file through a
/// sibling temporary file so a crash never leaves half a document behind.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<IndexMap<String, String>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(IndexMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if raw.trim().is_empty() {
            return Ok(IndexMap::new());
        }
        serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    fn write_entries(&self, entries: &IndexMap<String, String>) -> Result<(), StoreError> {
        let io_error = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let body = serde_json::to_string_pretty(entries).map_err(|source| {
            StoreError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let temp_path = self.temp_path();
        fs::write(&temp_path, body).map_err(io_error)?;
        fs::rename(&temp_path, &self.path).map_err(io_error)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut entries = self.read_entries()?;
        Ok(entries.swap_remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_owned(), value.to_owned());
        self.write_entries(&entries)?;
        tracing::debug!(
            path = %self.path.display(),
            key,
            bytes = value.len(),
            "Store entry written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;
    use tripsplit_application::{ExpenseDraft, TripSession};
    use tripsplit_domain::Money;

    #[fixture]
    fn dir() -> TempDir {
        tempfile::tempdir().expect("temp dir")
    }

    #[rstest]
    fn missing_file_reads_empty(dir: TempDir) {
        let store = JsonFileStore::new(dir.path().join("trip.json"));

        assert_eq!(store.get("tripname").expect("readable"), None);
    }

    #[rstest]
    fn set_then_get(dir: TempDir) {
        let path = dir.path().join("nested").join("trip.json");
        let mut store = JsonFileStore::new(&path);

        store.set("tripname", "Goa").expect("written");
        store.set("friendsList", r#"["A"]"#).expect("written");
        store.set("tripname", "Goa 2025").expect("overwritten");

        let reopened = JsonFileStore::new(&path);
        assert_eq!(
            reopened.get("tripname").expect("readable").as_deref(),
            Some("Goa 2025")
        );
        assert_eq!(
            reopened.get("friendsList").expect("readable").as_deref(),
            Some(r#"["A"]"#)
        );
        assert!(!path.with_file_name("trip.json.tmp").exists());
    }

    #[rstest]
    fn keeps_key_order_on_disk(dir: TempDir) {
        let path = dir.path().join("trip.json");
        let mut store = JsonFileStore::new(&path);

        store.set("tripname", "Goa").expect("written");
        store.set("expenses", "[]").expect("written");
        store.set("tripname", "Goa").expect("written");

        let raw = fs::read_to_string(&path).expect("file exists");
        let trip_at = raw.find("tripname").expect("tripname key");
        let expenses_at = raw.find("expenses").expect("expenses key");
        assert!(trip_at < expenses_at);
    }

    #[rstest]
    #[case::not_json("not json")]
    #[case::array(r#"["tripname"]"#)]
    #[case::non_string_value(r#"{"tripname": 3}"#)]
    fn malformed_file_is_reported(dir: TempDir, #[case] body: &str) {
        let path = dir.path().join("trip.json");
        fs::write(&path, body).expect("seeded");
        let store = JsonFileStore::new(&path);

        assert!(matches!(
            store.get("tripname"),
            Err(StoreError::Malformed { .. })
        ));
    }

    #[rstest]
    fn session_survives_restart(dir: TempDir) {
        let path = dir.path().join("trip.json");
        let mut session = TripSession::open(JsonFileStore::new(&path)).expect("opens");
        session.set_trip_name("Goa").expect("saved");
        for name in ["A", "B"] {
            session.add_participant(name).expect("saved");
        }
        session
            .add_expense(ExpenseDraft {
                title: "Taxi".to_string(),
                amount: Money::from_i64(50),
                payer: "A".to_string(),
                shared_by: None,
            })
            .expect("saved");
        drop(session);

        let reopened = TripSession::open(JsonFileStore::new(&path)).expect("reopens");

        assert_eq!(reopened.trip().name(), "Goa");
        assert_eq!(
            reopened.ledger().report().balance_of("A"),
            Some(Money::from_i64(25))
        );
        assert_eq!(reopened.ledger().outstanding().len(), 1);
    }
}
