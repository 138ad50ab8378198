//! JSON key-value storage backend for Wardbook
//!
//! This crate provides the concrete implementation of
//! [`wardbook_core::Registry`]: three JSON arrays, one per collection,
//! persisted under fixed keys in a synchronous text key-value store.
//!
//! ## Features
//!
//! - **JsonRegistry**: collection-per-key persistence with replace-or-append
//!   saves, cascade deletion, orphan cleanup, and street date repair
//! - **KeyValueStore**: the pluggable persistence medium — a directory of
//!   files by default, an in-memory map for tests
//! - **Attachment codecs**: base64 data-URI encode/decode for inline
//!   images and documents
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wardbook_core::Registry;
//! use wardbook_store::{FileKv, JsonRegistry, RegistryConfig};
//!
//! let kv = FileKv::open(RegistryConfig::new("./wardbook-data"))?;
//! let registry = JsonRegistry::new(kv);
//!
//! let cdas = registry.cdas();
//! ```

pub mod config;
pub mod error;
pub mod files;
pub mod kv;
pub mod registry;

pub use config::RegistryConfig;
pub use error::{KvError, KvResult};
pub use files::{data_uri_to_bytes, file_to_data_uri};
pub use kv::{FileKv, KeyValueStore, MemoryKv};
pub use registry::JsonRegistry;
