//! Key-value persistence for the player record.
//!
//! A save is a single JSON object whose top-level keys name records, e.g.
//! `{"PlayerData": {"level": 3, ...}}`. The progression store only ever
//! reads and writes its own key, so other keys in the file are preserved.

use crate::core::constants::{APP_DIR_NAME, SAVE_FILE_NAME};
use crate::core::error::{FocusError, Result};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage backend that maps string keys to JSON values.
pub trait KeyValueStore {
    fn load_value(&self, key: &str) -> Result<Option<Value>>;
    fn save_value(&mut self, key: &str, value: Value) -> Result<()>;

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>
    where
        Self: Sized,
    {
        match self.load_value(key)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    fn save<T: Serialize>(&mut self, key: &str, data: &T) -> Result<()>
    where
        Self: Sized,
    {
        let value = serde_json::to_value(data)?;
        self.save_value(key, value)
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", APP_DIR_NAME).ok_or(FocusError::NoDataDir)
}

/// Platform data directory (saves and logs), created if needed.
pub fn data_dir() -> Result<PathBuf> {
    let dir = project_dirs()?.data_dir().to_path_buf();
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Platform config directory, created if needed.
pub fn config_dir() -> Result<PathBuf> {
    let dir = project_dirs()?.config_dir().to_path_buf();
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Save file holding one JSON object of keyed records.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `save.json` inside `dir`, creating the directory.
    pub fn in_dir(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self::new(dir.join(SAVE_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read_map(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let json = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl KeyValueStore for JsonFileStore {
    fn load_value(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.read_map()?.remove(key))
    }

    fn save_value(&mut self, key: &str, value: Value) -> Result<()> {
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "overwriting unreadable save file");
                Map::new()
            }
        };
        map.insert(key.to_string(), value);

        let json = serde_json::to_string_pretty(&Value::Object(map))?;
        // Write next to the target and rename so a crash never leaves half a file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory store, used by tests and the `--ephemeral` flag.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
    save_count: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful saves since creation.
    pub fn save_count(&self) -> usize {
        self.save_count
    }

    pub fn insert_raw(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }
}

impl KeyValueStore for MemoryStore {
    fn load_value(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn save_value(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.save_count += 1;
        Ok(())
    }
}
