//! Backend configuration

use std::path::{Path, PathBuf};

/// Configuration for the file-backed key-value store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Directory holding one file per collection key
    pub data_dir: PathBuf,
}

impl RegistryConfig {
    /// Configuration rooted at the given data directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }
}
