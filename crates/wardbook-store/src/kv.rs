//! The persistence medium: a synchronous, durable text key-value store
//!
//! The registry only ever needs `get`/`set`/`remove` over a handful of
//! fixed keys, each holding one JSON-serialized array. Anything providing
//! that contract works as the medium; swapping it requires no registry
//! change.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;

use crate::config::RegistryConfig;
use crate::error::{KvError, KvResult};

/// Synchronous text key-value store, one value per key.
pub trait KeyValueStore: Send + Sync {
    /// Read the stored text for a key, `None` when absent.
    fn get(&self, key: &str) -> KvResult<Option<String>>;

    /// Write the full text for a key, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> KvResult<()>;

    /// Remove a key. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> KvResult<()>;
}

fn validate_key(key: &str) -> KvResult<()> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(KvError::InvalidKey(key.to_string()))
    }
}

/// File-backed store: each key maps to `<data_dir>/<key>.json`.
#[derive(Debug)]
pub struct FileKv {
    data_dir: PathBuf,
}

impl FileKv {
    /// Open (and create if needed) the data directory.
    pub fn open(config: RegistryConfig) -> KvResult<Self> {
        fs::create_dir_all(&config.data_dir)?;
        Ok(Self {
            data_dir: config.data_dir,
        })
    }

    fn path_for(&self, key: &str) -> KvResult<PathBuf> {
        validate_key(key)?;
        Ok(self.data_dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKv {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> KvResult<()> {
        let path = self.path_for(key)?;
        // temp file + rename; rename is atomic within the data dir
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> KvResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryKv {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        validate_key(key)?;
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> KvResult<()> {
        validate_key(key)?;
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> KvResult<()> {
        validate_key(key)?;
        self.entries.lock().remove(key);
        Ok(())
    }
}
