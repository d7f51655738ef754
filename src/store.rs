//! Word list persistence.
//!
//! The list lives under a single key in a key-value backend, encoded as a
//! JSON array of strings. Reads fail soft; writes replace the whole entry.
//!
//! Structure:
//! - Pure functions: path computation, decoding
//! - Effect functions: backend reads and writes

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::types::WordList;

/// Key under which the word list is stored.
pub const WORD_STORAGE_KEY: &str = "geulgyeob-words";

// ============================================================================
// PURE FUNCTIONS (Computations)
// ============================================================================

/// Returns the default store directory.
///
/// On Linux: ~/.local/share/geulgyeob/
pub fn default_store_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("geulgyeob")
}

/// Decode a stored value into a word list.
///
/// Anything that is not a JSON array of strings decodes to None.
pub fn decode_words(raw: &str) -> Option<WordList> {
    serde_json::from_str::<WordList>(raw).ok()
}

// ============================================================================
// BACKENDS
// ============================================================================

/// Minimal key-value persistence used by [`WordStore`].
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Replace the value for a key.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// One JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    /// Path of the file backing a key.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Write to a sibling temp file, then rename over the target.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let io_err = |source: io::Error| StoreError::Io {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(io_err)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(io_err)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(io_err(e));
        }
        Ok(())
    }
}

/// In-process backend, handy for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing encoding.
    pub fn with_raw(key: &str, value: &str) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key.to_string(), value.to_string());
        MemoryStore { entries }
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// WORD STORE
// ============================================================================

/// Loads and saves the word list through a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct WordStore<S> {
    backend: S,
}

impl<S: KeyValueStore> WordStore<S> {
    pub fn new(backend: S) -> Self {
        WordStore { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read the persisted list. Missing or malformed data yields an empty list.
    pub fn load(&self) -> WordList {
        let raw = match self.backend.get(WORD_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no stored word list, starting empty");
                return WordList::default();
            }
            Err(e) => {
                warn!(error = %e, "failed to read word list, starting empty");
                return WordList::default();
            }
        };

        match decode_words(&raw) {
            Some(words) => {
                info!(count = words.len(), "loaded word list");
                words
            }
            None => {
                warn!("stored word list is malformed, starting empty");
                WordList::default()
            }
        }
    }

    /// Overwrite the persisted list with `words`.
    pub fn save(&mut self, words: &WordList) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(words)?;
        self.backend.set(WORD_STORAGE_KEY, &encoded)?;
        info!(count = words.len(), "saved word list");
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn words(items: &[&str]) -> WordList {
        WordList::from_entries(items.iter().copied())
    }

    #[test]
    fn test_default_store_dir_is_reasonable() {
        let dir = default_store_dir();
        assert!(dir.ends_with("geulgyeob"));
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let store = WordStore::new(MemoryStore::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_corrupt_value_is_empty() {
        let store = WordStore::new(MemoryStore::with_raw(WORD_STORAGE_KEY, "{not json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_wrong_shape_is_empty() {
        let store = WordStore::new(MemoryStore::with_raw(WORD_STORAGE_KEY, r#"{"words":[]}"#));
        assert!(store.load().is_empty());

        let store = WordStore::new(MemoryStore::with_raw(WORD_STORAGE_KEY, "[1, 2]"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_drops_blank_entries() {
        let store = WordStore::new(MemoryStore::with_raw(WORD_STORAGE_KEY, r#"["글자"," ","겹침"]"#));
        assert_eq!(store.load(), words(&["글자", "겹침"]));
    }

    #[test]
    fn test_save_writes_json_array() {
        let mut store = WordStore::new(MemoryStore::new());
        store.save(&words(&["글자", "겹침"])).unwrap();
        assert_eq!(store.backend().raw(WORD_STORAGE_KEY), Some(r#"["글자","겹침"]"#));
    }

    #[test]
    fn test_file_store_save_and_load() {
        let temp = TempDir::new().unwrap();
        let mut store = WordStore::new(FileStore::new(temp.path().join("nested")));

        let list = words(&["글자", "겹침", "글자"]);
        store.save(&list).unwrap();

        let reopened = WordStore::new(FileStore::new(temp.path().join("nested")));
        assert_eq!(reopened.load(), list);
    }

    #[test]
    fn test_file_store_save_replaces_previous_list() {
        let temp = TempDir::new().unwrap();
        let mut store = WordStore::new(FileStore::new(temp.path()));

        store.save(&words(&["하나", "둘"])).unwrap();
        store.save(&words(&["셋"])).unwrap();

        assert_eq!(store.load(), words(&["셋"]));
        assert!(!temp.path().join("geulgyeob-words.json.tmp").exists());
    }

    #[test]
    fn test_file_store_failed_rename_removes_temp_file() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path());
        // A directory at the target path makes the rename fail.
        fs::create_dir(store.path_for(WORD_STORAGE_KEY)).unwrap();

        let err = store.set(WORD_STORAGE_KEY, "[]").unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(!temp.path().join("geulgyeob-words.json.tmp").exists());
    }

    #[test]
    fn test_file_store_missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());
        assert_eq!(store.get(WORD_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_path_uses_key() {
        let store = FileStore::new("/data/geulgyeob");
        assert_eq!(
            store.path_for(WORD_STORAGE_KEY),
            PathBuf::from("/data/geulgyeob/geulgyeob-words.json")
        );
    }
}
