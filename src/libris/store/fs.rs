use super::KeyValueStore;
use crate::error::{LibrisError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const STORE_FILENAME: &str = "annotations.json";

/// File-backed key-value store: the whole key space is one JSON object in
/// `annotations.json` under the data directory. Each mutation is a
/// read-modify-write of that file, which keeps single-key writes atomic
/// from the point of view of the rest of the application.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILENAME)
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let path = self.store_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&path)
            .map_err(|e| LibrisError::StoreRead(format!("{}: {}", path.display(), e)))?;
        let entries: BTreeMap<String, String> = serde_json::from_str(&content)
            .map_err(|e| LibrisError::StoreRead(format!("{}: {}", path.display(), e)))?;
        Ok(entries)
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        self.ensure_dir(&self.data_dir)?;
        let path = self.store_path();
        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| LibrisError::StoreWrite(e.to_string()))?;
        fs::write(&path, content)
            .map_err(|e| LibrisError::StoreWrite(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)
                .map_err(|e| LibrisError::StoreWrite(format!("{}: {}", path.display(), e)))?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.load()?.into_keys().collect())
    }
}
