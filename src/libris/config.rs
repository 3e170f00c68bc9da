use crate::error::{LibrisError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for libris, stored in <data_dir>/config.json
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibrisConfig {
    /// Directory holding books.json and the book files themselves.
    /// Defaults to <data_dir>/books when unset.
    #[serde(default)]
    pub shelf_dir: Option<PathBuf>,
}

impl LibrisConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LibrisError::Io)?;
        let config: LibrisConfig =
            serde_json::from_str(&content).map_err(LibrisError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LibrisError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(LibrisError::Serialization)?;
        fs::write(config_path, content).map_err(LibrisError::Io)?;
        Ok(())
    }

    /// Resolve the effective shelf directory for a given data directory.
    pub fn shelf_dir<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        self.shelf_dir
            .clone()
            .unwrap_or_else(|| data_dir.as_ref().join("books"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_config_returns_default() {
        let temp = tempfile::tempdir().unwrap();
        let config = LibrisConfig::load(temp.path().join("nope")).unwrap();
        assert_eq!(config, LibrisConfig::default());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let temp = tempfile::tempdir().unwrap();

        let config = LibrisConfig {
            shelf_dir: Some(PathBuf::from("/books/shelf")),
        };
        config.save(temp.path()).unwrap();

        let loaded = LibrisConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.shelf_dir, Some(PathBuf::from("/books/shelf")));
    }

    #[test]
    fn shelf_dir_falls_back_to_data_dir() {
        let config = LibrisConfig::default();
        assert_eq!(
            config.shelf_dir("/data"),
            PathBuf::from("/data").join("books")
        );
    }
}
