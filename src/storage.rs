//! Key-value persistence for the pool and daily selection records.
//!
//! Each record is a JSON document stored as raw bytes under a string key.
//! Bytes that do not decode, invalid UTF-8 included, count as malformed
//! rather than as a storage failure. The store is
//! an owned object lent to the pool and engine by `&mut`; there is no
//! global instance.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::{hlog_debug, Result};

/// Key of the persisted [`DailySelection`](crate::core::DailySelection).
pub const DAILY_TASKS_KEY: &str = "daily-tasks";

/// Key of the persisted template pool.
pub const TASK_POOL_KEY: &str = "custom-task-pool";

/// A string-keyed record store.
pub trait KeyValueStore {
    /// Read the raw record under `key`, `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write `value` under `key`, replacing any previous record.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()>;

    /// Delete the record under `key`. Succeeds if nothing is stored.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Outcome of decoding a stored JSON record.
#[derive(Debug)]
pub enum Loaded<T> {
    Missing,
    Malformed(serde_json::Error),
    Found(T),
}

impl<T> Loaded<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Loaded::Found(value) => Some(value),
            _ => None,
        }
    }
}

/// Read and decode the JSON record under `key`.
///
/// Storage failures are returned as errors; a record that exists but does
/// not decode is reported as [`Loaded::Malformed`] so callers can recover.
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Loaded<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(Loaded::Missing);
    };
    match serde_json::from_slice(&raw) {
        Ok(value) => Ok(Loaded::Found(value)),
        Err(e) => Ok(Loaded::Malformed(e)),
    }
}

/// Encode `value` as JSON and store it under `key`.
pub fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_vec(value)?;
    store.set(key, &json)
}

/// Store that keeps one `<key>.json` file per record in a directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.record_path(key);
        hlog_debug!("FileStore::get path={}", path.display());
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        if !self.dir.exists() {
            hlog_debug!("Creating data directory: {}", self.dir.display());
            fs::create_dir_all(&self.dir)?;
        }

        let path = self.record_path(key);
        if path.exists() {
            let backup_path = path.with_extension("json.bak");
            fs::copy(&path, &backup_path)?;
        }

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;
        hlog_debug!("FileStore::set saved {}", path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.record_path(key);
        match fs::remove_file(&path) {
            Ok(()) => {
                hlog_debug!("FileStore::remove {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store, used by tests and by callers that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.records.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.records.remove(key);
        Ok(())
    }
}
