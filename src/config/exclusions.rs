// src/config/exclusions.rs
// =============================================================================
// Exclusion word sets and where they live.
//
// Layout under the config directory:
//   exclude_words.json        the default set, a JSON array of strings
//   presets/<name>.json       named presets, same format
//
// Words are lowercased on the way in and written sorted, so the files diff
// cleanly and two runs over the same set produce the same file.
// =============================================================================

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_FILE: &str = "exclude_words.json";
const PRESETS_DIR: &str = "presets";

/// A set of lowercase words left out of word-frequency counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionSet(BTreeSet<String>);

impl ExclusionSet {
    /// Adds `word` (lowercased, trimmed). Returns false if it was already present or empty.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return false;
        }
        self.0.insert(word)
    }

    pub fn remove(&mut self, word: &str) -> bool {
        self.0.remove(&word.trim().to_lowercase())
    }

    /// Expects an already-lowercased word.
    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ExclusionSet::default();
        for word in iter {
            set.insert(word.as_ref());
        }
        set
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid word list in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid preset name \"{0}\"")]
    InvalidPresetName(String),
}

/// Persistence for the default exclusion set and named presets.
pub trait ExclusionStore {
    /// Creates whatever storage is missing; existing data is left alone.
    fn init(&self) -> Result<(), StoreError>;
    fn load_default(&self) -> Result<ExclusionSet, StoreError>;
    fn save_default(&self, words: &ExclusionSet) -> Result<(), StoreError>;
    fn save_preset(&self, name: &str, words: &ExclusionSet) -> Result<(), StoreError>;
    /// `Ok(None)` when no preset with that name exists.
    fn load_preset(&self, name: &str) -> Result<Option<ExclusionSet>, StoreError>;
}

/// JSON files under a config directory.
#[derive(Debug, Clone)]
pub struct JsonExclusionStore {
    root: PathBuf,
}

impl JsonExclusionStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        JsonExclusionStore { root: root.into() }
    }

    fn default_path(&self) -> PathBuf {
        self.root.join(DEFAULT_FILE)
    }

    fn preset_path(&self, name: &str) -> Result<PathBuf, StoreError> {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | ' '));
        if !valid {
            return Err(StoreError::InvalidPresetName(name.to_string()));
        }
        Ok(self.root.join(PRESETS_DIR).join(format!("{name}.json")))
    }
}

impl ExclusionStore for JsonExclusionStore {
    fn init(&self) -> Result<(), StoreError> {
        let presets = self.root.join(PRESETS_DIR);
        fs::create_dir_all(&presets).map_err(|source| StoreError::Io {
            path: presets.clone(),
            source,
        })?;

        let default = self.default_path();
        if !default.exists() {
            tracing::info!(path = %default.display(), "creating empty exclusion list");
            write_words(&default, &ExclusionSet::default())?;
        }
        Ok(())
    }

    fn load_default(&self) -> Result<ExclusionSet, StoreError> {
        let path = self.default_path();
        if !path.exists() {
            return Ok(ExclusionSet::default());
        }
        read_words(&path)
    }

    fn save_default(&self, words: &ExclusionSet) -> Result<(), StoreError> {
        write_words(&self.default_path(), words)
    }

    fn save_preset(&self, name: &str, words: &ExclusionSet) -> Result<(), StoreError> {
        write_words(&self.preset_path(name)?, words)
    }

    fn load_preset(&self, name: &str) -> Result<Option<ExclusionSet>, StoreError> {
        let path = self.preset_path(name)?;
        if !path.exists() {
            return Ok(None);
        }
        read_words(&path).map(Some)
    }
}

fn read_words(path: &Path) -> Result<ExclusionSet, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    // re-collect so hand-edited files with capitals still match lowercase tokens
    let words: Vec<String> = serde_json::from_str(&raw).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(words.into_iter().collect())
}

fn write_words(path: &Path, words: &ExclusionSet) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(words).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_lowercases_and_ignores_blank() {
        let mut set = ExclusionSet::default();
        assert!(set.insert("  The "));
        assert!(!set.insert("the"));
        assert!(!set.insert("   "));
        assert!(set.contains("the"));
        assert!(set.remove("THE"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_init_creates_empty_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonExclusionStore::new(dir.path());
        store.init().unwrap();

        assert!(dir.path().join("presets").is_dir());
        let raw = fs::read_to_string(dir.path().join("exclude_words.json")).unwrap();
        assert_eq!(raw.trim(), "[]");
        assert!(store.load_default().unwrap().is_empty());
    }

    #[test]
    fn test_init_keeps_existing_words() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonExclusionStore::new(dir.path());
        store.save_default(&["keep"].into_iter().collect()).unwrap();
        store.init().unwrap();
        assert!(store.load_default().unwrap().contains("keep"));
    }

    #[test]
    fn test_default_round_trip_is_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonExclusionStore::new(dir.path());
        let words: ExclusionSet = ["zebra", "Apple", "mango"].into_iter().collect();
        store.save_default(&words).unwrap();

        let raw = fs::read_to_string(dir.path().join("exclude_words.json")).unwrap();
        let stored: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, vec!["apple", "mango", "zebra"]);
        assert_eq!(store.load_default().unwrap(), words);
    }

    #[test]
    fn test_presets() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonExclusionStore::new(dir.path());
        assert_eq!(store.load_preset("news").unwrap(), None);

        let words: ExclusionSet = ["said", "reuters"].into_iter().collect();
        store.save_preset("news", &words).unwrap();
        assert_eq!(store.load_preset("news").unwrap(), Some(words));
        assert!(dir.path().join("presets").join("news.json").is_file());
    }

    #[test]
    fn test_preset_name_cannot_escape_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonExclusionStore::new(dir.path());
        assert!(matches!(
            store.save_preset("../evil", &ExclusionSet::default()),
            Err(StoreError::InvalidPresetName(_))
        ));
    }

    #[test]
    fn test_hand_edited_file_is_lowercased() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("exclude_words.json"), r#"["The", "AND"]"#).unwrap();
        let store = JsonExclusionStore::new(dir.path());
        let words = store.load_default().unwrap();
        assert!(words.contains("the"));
        assert!(words.contains("and"));
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("exclude_words.json"), "{not json").unwrap();
        let store = JsonExclusionStore::new(dir.path());
        assert!(matches!(store.load_default(), Err(StoreError::Json { .. })));
    }
}
