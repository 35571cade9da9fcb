//! Key-value settings persistence.
//!
//! The selector never touches a global store. The host hands it something
//! implementing [`SettingsStore`], which is a JSON file in the config directory
//! at runtime and an in-memory map in tests.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{SettingsError, SettingsResult};

/// Settings key holding the ordered list of pinned model ids
pub const PINNED_MODELS_KEY: &str = "pinned:models";

/// Async key-value store for small settings records.
#[allow(async_fn_in_trait)]
pub trait SettingsStore {
    /// Read a record, `None` if the key was never written
    async fn get(&self, key: &str) -> SettingsResult<Option<Value>>;

    /// Overwrite a record
    async fn put(&self, key: &str, value: Value) -> SettingsResult<()>;
}

/// Settings persisted as one JSON object on disk.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles on the file
    write_lock: tokio::sync::Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> SettingsResult<Map<String, Value>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(SettingsError::Io(self.path.clone(), e)),
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&contents)? {
            Value::Object(map) => Ok(map),
            _ => Err(SettingsError::Malformed(self.path.clone())),
        }
    }
}

impl SettingsStore for JsonFileStore {
    async fn get(&self, key: &str) -> SettingsResult<Option<Value>> {
        let map = self.read_all().await?;
        Ok(map.get(key).cloned())
    }

    async fn put(&self, key: &str, value: Value) -> SettingsResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut map = self.read_all().await?;
        map.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| SettingsError::Io(parent.to_path_buf(), e))?;
        }

        let contents = serde_json::to_string_pretty(&Value::Object(map))?;
        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|e| SettingsError::Io(self.path.clone(), e))
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: std::sync::Mutex<std::collections::HashMap<String, Value>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl SettingsStore for MemoryStore {
    async fn get(&self, key: &str) -> SettingsResult<Option<Value>> {
        Ok(self
            .records
            .lock()
            .ok()
            .and_then(|records| records.get(key).cloned()))
    }

    async fn put(&self, key: &str, value: Value) -> SettingsResult<()> {
        if let Ok(mut records) = self.records.lock() {
            records.insert(key.to_string(), value);
        }
        Ok(())
    }
}

/// Store whose writes always fail.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct FailingStore;

#[cfg(test)]
impl SettingsStore for FailingStore {
    async fn get(&self, _key: &str) -> SettingsResult<Option<Value>> {
        Ok(None)
    }

    async fn put(&self, _key: &str, _value: Value) -> SettingsResult<()> {
        Err(SettingsError::Io(
            PathBuf::from("settings.json"),
            std::io::Error::other("read-only file system"),
        ))
    }
}

/// Load the pinned model ids, treating missing or malformed data as empty.
pub async fn load_pinned<S: SettingsStore>(store: &S) -> Vec<String> {
    match store.get(PINNED_MODELS_KEY).await {
        Ok(Some(value)) => serde_json::from_value(value).unwrap_or_default(),
        Ok(None) => vec![],
        Err(e) => {
            crate::log::log(&format!("Failed to load pinned models: {}", e));
            vec![]
        }
    }
}
