use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::Result;

/// Cap on retained history entries; the oldest entry falls off first.
pub const MAX_HISTORY_ENTRIES: usize = 10;

/// Durable store for past search keywords, most-recent-first.
///
/// Reads fail open: a missing or corrupt store reads as an empty history.
/// Implementations serialize the read-modify-write inside [`record`] so
/// concurrent callers cannot lose updates.
///
/// [`record`]: HistoryStore::record
pub trait HistoryStore: Send + Sync {
    /// Record a submitted keyword. Blank keywords are ignored; a repeated
    /// keyword moves to the front instead of duplicating. The list is
    /// truncated to [`MAX_HISTORY_ENTRIES`] and written back.
    fn record(&self, keyword: &str) -> Result<()>;

    /// The stored keyword list, most recent first. Never fails; storage
    /// problems degrade to an empty list.
    fn history(&self) -> Vec<String>;
}

fn updated(mut entries: Vec<String>, keyword: &str) -> Vec<String> {
    entries.retain(|entry| entry != keyword);
    entries.insert(0, keyword.to_string());
    entries.truncate(MAX_HISTORY_ENTRIES);
    entries
}

/// History persisted as a JSON string array in a single file.
pub struct FileHistoryStore {
    path: PathBuf,
    // Guards the whole read-modify-write cycle, not just the file handle.
    lock: Mutex<()>,
}

impl FileHistoryStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Vec<String> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                log::warn!("history file {} unreadable: {err}", self.path.display());
                return Vec::new();
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("history file {} corrupt: {err}", self.path.display());
                Vec::new()
            }
        }
    }

    fn write_entries(&self, entries: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl HistoryStore for FileHistoryStore {
    fn record(&self, keyword: &str) -> Result<()> {
        if keyword.trim().is_empty() {
            return Ok(());
        }
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let entries = updated(self.read_entries(), keyword);
        self.write_entries(&entries)
    }

    fn history(&self) -> Vec<String> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        self.read_entries()
    }
}

/// In-memory history, for tests and embedded use.
#[derive(Default)]
pub struct MemoryHistoryStore {
    entries: Mutex<Vec<String>>,
}

impl MemoryHistoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn record(&self, keyword: &str) -> Result<()> {
        if keyword.trim().is_empty() {
            return Ok(());
        }
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        *entries = updated(std::mem::take(&mut *entries), keyword);
        Ok(())
    }

    fn history(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn file_store() -> (tempfile::TempDir, FileHistoryStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHistoryStore::new(dir.path().join("search_history.json"));
        (dir, store)
    }

    #[test]
    fn records_most_recent_first() {
        let store = MemoryHistoryStore::new();
        store.record("155mm").unwrap();
        store.record("榴弹炮").unwrap();
        assert_eq!(store.history(), vec!["榴弹炮", "155mm"]);
    }

    #[test]
    fn duplicate_moves_to_front_without_growing() {
        let store = MemoryHistoryStore::new();
        store.record("a").unwrap();
        store.record("b").unwrap();
        store.record("a").unwrap();
        assert_eq!(store.history(), vec!["a", "b"]);
    }

    #[test]
    fn eleventh_keyword_evicts_the_oldest() {
        let store = MemoryHistoryStore::new();
        for i in 0..11 {
            store.record(&format!("kw{i}")).unwrap();
        }
        let history = store.history();
        assert_eq!(history.len(), MAX_HISTORY_ENTRIES);
        assert_eq!(history[0], "kw10");
        assert!(!history.contains(&"kw0".to_string()));
    }

    #[test]
    fn blank_keyword_is_ignored() {
        let store = MemoryHistoryStore::new();
        store.record("  ").unwrap();
        store.record("").unwrap();
        assert!(store.history().is_empty());
    }

    #[test]
    fn file_store_round_trips() {
        let (_dir, store) = file_store();
        store.record("导弹").unwrap();
        store.record("USA").unwrap();
        assert_eq!(store.history(), vec!["USA", "导弹"]);

        // A fresh store over the same path sees the persisted list.
        let reopened = FileHistoryStore::new(store.path());
        assert_eq!(reopened.history(), vec!["USA", "导弹"]);
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let (_dir, store) = file_store();
        assert!(store.history().is_empty());
    }

    #[test]
    fn corrupt_file_reads_as_empty_and_recovers() {
        let (_dir, store) = file_store();
        std::fs::write(store.path(), b"{not json").unwrap();
        assert!(store.history().is_empty());

        store.record("recovered").unwrap();
        assert_eq!(store.history(), vec!["recovered"]);
    }
}
