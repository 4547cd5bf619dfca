use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use super::PersistedStore;

/// [`PersistedStore`] backed by a single JSON object on disk:
///
/// ```json
/// {
///   "recentSearches": "[\"Justin Wyss-Gallifent\",\"Larry Herman\"]"
/// }
/// ```
///
/// A missing or unparsable file reads as empty. Writes go to a sibling
/// temp file which is then renamed over the original.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read '{}'", self.path.display()))?;

        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unparsable store file");
                Ok(BTreeMap::new())
            }
        }
    }
}

impl PersistedStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create '{}'", dir.display()))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&entries)?)
            .with_context(|| format!("Failed to write '{}'", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace '{}'", self.path.display()))?;

        debug!(path = %self.path.display(), key, "Store entry saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join("find_my_professor_tests").join(name)
    }

    #[test]
    fn test_missing_file_reads_as_absent() {
        let path = temp_path("store_missing.json");
        let _ = fs::remove_file(&path);

        let store = JsonFileStore::new(&path);
        assert_eq!(store.get("recentSearches").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_from_fresh_handle() {
        let path = temp_path("store_roundtrip.json");
        let _ = fs::remove_file(&path);

        let mut store = JsonFileStore::new(&path);
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(reopened.get("b").unwrap().as_deref(), Some("2"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_corrupt_file_is_replaced_on_write() {
        let path = temp_path("store_corrupt.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.get("a").unwrap(), None);

        store.set("a", "fresh").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("fresh"));

        fs::remove_file(&path).unwrap();
    }
}
