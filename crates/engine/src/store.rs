//! The persistence boundary: an opaque string-keyed store.
//!
//! The ledger never touches files directly; it goes through a
//! [`StorageAdapter`] holding some [`KvStore`]. Two keys exist: the full
//! transaction snapshot and the dark-mode preference flag. Reads are
//! fail-soft: absent or malformed stored data is treated as "no data" and
//! never surfaces as an error.

use std::{
    collections::HashMap,
    fmt, fs,
    path::{Path, PathBuf},
};

use crate::{StoreError, Transaction};

const TRANSACTIONS_KEY: &str = "transactions";
const DARK_MODE_KEY: &str = "dark_mode";

/// An opaque get/set string store.
pub trait KvStore: fmt::Debug {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store, used by tests and as a throwaway fallback.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A store persisted as one JSON object of string keys on disk.
///
/// The whole map is rewritten on every `set`; there are no partial writes
/// and no versioning. An unreadable or malformed file opens as empty.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!(path = %path.display(), "malformed store file, starting empty: {err}");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self { path, entries }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(&self.entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

/// Wraps a [`KvStore`] with the snapshot (de)serialization the ledger needs.
#[derive(Debug)]
pub struct StorageAdapter {
    store: Box<dyn KvStore>,
}

impl StorageAdapter {
    #[must_use]
    pub fn new(store: Box<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Reads the persisted transaction snapshot.
    ///
    /// Absent key or undecodable blob both yield an empty list; the next
    /// successful [`save`](Self::save) overwrites whatever was there.
    pub fn load(&self) -> Vec<Transaction> {
        let Some(raw) = self.store.get(TRANSACTIONS_KEY) else {
            return Vec::new();
        };

        match serde_json::from_str(&raw) {
            Ok(transactions) => transactions,
            Err(err) => {
                tracing::warn!("malformed transaction snapshot, starting empty: {err}");
                Vec::new()
            }
        }
    }

    /// Overwrites the stored blob with a full serialization of `transactions`.
    pub fn save(&mut self, transactions: &[Transaction]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(transactions)?;
        self.store.set(TRANSACTIONS_KEY, &raw)
    }

    pub fn dark_mode(&self) -> bool {
        self.store
            .get(DARK_MODE_KEY)
            .is_some_and(|value| value == "true")
    }

    pub fn set_dark_mode(&mut self, enabled: bool) -> Result<(), StoreError> {
        self.store
            .set(DARK_MODE_KEY, if enabled { "true" } else { "false" })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{MoneyCents, TransactionKind};

    fn sample() -> Vec<Transaction> {
        vec![Transaction {
            id: 1,
            description: "Salary".to_string(),
            amount: MoneyCents::new(100_000),
            kind: TransactionKind::Income,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }]
    }

    #[test]
    fn load_returns_empty_when_key_absent() {
        let adapter = StorageAdapter::new(Box::new(MemoryStore::new()));
        assert!(adapter.load().is_empty());
    }

    #[test]
    fn load_returns_empty_on_malformed_blob() {
        let mut store = MemoryStore::new();
        store.set(TRANSACTIONS_KEY, "{not json").unwrap();
        let adapter = StorageAdapter::new(Box::new(store));
        assert!(adapter.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut adapter = StorageAdapter::new(Box::new(MemoryStore::new()));
        let transactions = sample();
        adapter.save(&transactions).unwrap();
        assert_eq!(adapter.load(), transactions);
    }

    #[test]
    fn dark_mode_defaults_off_and_round_trips() {
        let mut adapter = StorageAdapter::new(Box::new(MemoryStore::new()));
        assert!(!adapter.dark_mode());
        adapter.set_dark_mode(true).unwrap();
        assert!(adapter.dark_mode());
        adapter.set_dark_mode(false).unwrap();
        assert!(!adapter.dark_mode());
    }
}
