//! Local reference store
//!
//! A small file-backed key/value association surviving process restarts.
//! The only key in use carries the selected equipment title from the list
//! view to the detail view.

use std::{fs, path::PathBuf};

use indexmap::IndexMap;

use crate::error::AppResult;

/// Key under which the list view records the selected equipment title
pub const SELECTED_EQUIPMENT_TITLE: &str = "selectedFridgeTitle";

#[derive(Debug, Clone)]
pub struct LocalReferenceStore {
    path: PathBuf,
}

impl LocalReferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read one key; `None` when absent or when nothing was stored yet
    pub fn get(&self, key: &str) -> AppResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(self.read_map()?.get(key).cloned())
    }

    /// Write one key, overwriting any previous value
    pub fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut map = if self.path.exists() {
            self.read_map()?
        } else {
            IndexMap::new()
        };
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    /// Remove one key; absent keys are a no-op
    pub fn remove(&self, key: &str) -> AppResult<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let mut map = self.read_map()?;
        map.shift_remove(key);
        self.write_map(&map)
    }

    fn read_map(&self) -> AppResult<IndexMap<String, String>> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_map(&self, map: &IndexMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(map)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn round_trips_a_key_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("references.json");

        let store = LocalReferenceStore::new(&path);
        store.set(SELECTED_EQUIPMENT_TITLE, "Refrigerator A1").unwrap();

        let reopened = LocalReferenceStore::new(&path);
        assert_eq!(
            reopened.get(SELECTED_EQUIPMENT_TITLE).unwrap().as_deref(),
            Some("Refrigerator A1")
        );
    }

    #[test]
    fn set_overwrites_the_previous_value() {
        let dir = tempdir().unwrap();
        let store = LocalReferenceStore::new(dir.path().join("references.json"));

        store.set(SELECTED_EQUIPMENT_TITLE, "Refrigerator A1").unwrap();
        store.set(SELECTED_EQUIPMENT_TITLE, "Freezer C3").unwrap();

        assert_eq!(
            store.get(SELECTED_EQUIPMENT_TITLE).unwrap().as_deref(),
            Some("Freezer C3")
        );
    }

    #[test]
    fn missing_key_and_missing_file_read_as_none() {
        let dir = tempdir().unwrap();
        let store = LocalReferenceStore::new(dir.path().join("references.json"));

        assert_eq!(store.get(SELECTED_EQUIPMENT_TITLE).unwrap(), None);

        store.set("other", "value").unwrap();
        assert_eq!(store.get(SELECTED_EQUIPMENT_TITLE).unwrap(), None);
    }

    #[test]
    fn remove_is_a_no_op_when_absent() {
        let dir = tempdir().unwrap();
        let store = LocalReferenceStore::new(dir.path().join("references.json"));

        store.remove(SELECTED_EQUIPMENT_TITLE).unwrap();

        store.set(SELECTED_EQUIPMENT_TITLE, "Refrigerator A1").unwrap();
        store.remove(SELECTED_EQUIPMENT_TITLE).unwrap();
        assert_eq!(store.get(SELECTED_EQUIPMENT_TITLE).unwrap(), None);
    }

    #[test]
    fn creates_parent_directories_on_first_write() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("state").join("references.json");
        let store = LocalReferenceStore::new(&nested);

        store.set(SELECTED_EQUIPMENT_TITLE, "Refrigerator A1").unwrap();
        assert!(nested.exists());
    }
}
