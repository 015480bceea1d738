//! Configuration types for embedding the policy engine
//!
//! Embedders that construct their store from deserialized configuration can
//! describe it with [`LocalStateConfig`] instead of instantiating a concrete
//! store type directly.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::store::{FilePrefStore, MemoryPrefStore};
use crate::traits::PrefStore;

/// Local-state store configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LocalStateConfig {
    /// In-memory store (not persistent)
    #[default]
    Memory,

    /// File-backed store
    File {
        /// Path to the local-state JSON file
        path: String,
    },
}

impl LocalStateConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self {
            LocalStateConfig::File { path } if path.is_empty() => {
                Err(Error::config("Local state file path cannot be empty"))
            }
            _ => Ok(()),
        }
    }

    /// Build the configured store
    pub fn build(&self) -> Result<Box<dyn PrefStore>> {
        self.validate()?;
        match self {
            LocalStateConfig::Memory => Ok(Box::new(MemoryPrefStore::new())),
            LocalStateConfig::File { path } => Ok(Box::new(FilePrefStore::new(path)?)),
        }
    }
}
