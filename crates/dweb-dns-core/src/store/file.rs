// # File Preference Store
//
// File-backed implementation of PrefStore with crash recovery.
//
// ## Purpose
//
// Persists explicitly-set policy values across browser restarts. Registered
// defaults are runtime state only and are never written to disk: a profile
// that has every pref at its default serializes to an empty prefs map, and
// upgrading a default retroactively applies to such profiles.
//
// ## Crash Recovery
//
// - Atomic writes: new state goes to a temporary file, then rename
// - Corruption detection: JSON is validated on load
// - Automatic backup: the last known good state is kept in a `.backup` file
// - Recovery: falls back to the backup if the main file is corrupted
//
// ## File Format
//
// ```json
// {
//   "version": "1.0",
//   "prefs": {
//     "dweb_dns.ens.resolve_method": 3
//   }
// }
// ```

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::Error;
use crate::traits::PrefStore;

/// Prefs file format version, for future migration if the format changes
const PREFS_FILE_VERSION: &str = "1.0";

/// File-backed preference store
///
/// Writes go to disk immediately. A write failure is logged and the
/// in-memory value is kept; the store stays dirty so the next successful
/// write (or an explicit [`flush`](FilePrefStore::flush)) persists it.
///
/// # Example
///
/// ```rust,no_run
/// use dweb_dns_core::store::FilePrefStore;
/// use dweb_dns_core::traits::PrefStore;
///
/// # fn main() -> dweb_dns_core::Result<()> {
/// let store = FilePrefStore::new("/var/lib/browser/local_state.json")?;
/// store.register_integer_pref("example.pref", 0);
/// store.set_integer("example.pref", 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FilePrefStore {
    path: PathBuf,
    state: RwLock<FileState>,
}

/// Internal state for the file-backed store
#[derive(Debug)]
struct FileState {
    defaults: HashMap<String, i32>,
    values: HashMap<String, i32>,
    dirty: bool,
}

/// Serializable prefs file format
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct PrefsFileFormat {
    version: String,
    prefs: HashMap<String, i32>,
}

impl FilePrefStore {
    /// Create or load a file preference store
    ///
    /// This will:
    /// 1. Try to load the existing prefs file
    /// 2. If corruption is detected, try to load from the backup
    /// 3. If both fail, start with empty state
    /// 4. Create parent directories if needed
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::config(format!(
                        "Failed to create prefs directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let values = Self::load_prefs_with_recovery(&path)?;

        Ok(Self {
            path,
            state: RwLock::new(FileState {
                defaults: HashMap::new(),
                values,
                dirty: false,
            }),
        })
    }

    /// Load prefs from file with automatic recovery
    ///
    /// Recovery strategy:
    /// 1. Try to load the main prefs file
    /// 2. On a JSON parse error, try the backup
    /// 3. If the backup also fails, start with empty state
    fn load_prefs_with_recovery(path: &Path) -> Result<HashMap<String, i32>, Error> {
        match Self::load_prefs(path) {
            Ok(values) => {
                tracing::debug!("Loaded prefs file: {} values", values.len());
                Ok(values)
            }
            Err(Error::Json(e)) => {
                tracing::warn!(
                    "Prefs file appears corrupted: {}. Attempting recovery from backup.",
                    e
                );

                let backup_path = Self::backup_path(path);
                if !backup_path.exists() {
                    tracing::warn!("No backup file found. Starting with empty prefs.");
                    return Ok(HashMap::new());
                }

                match Self::load_prefs(&backup_path) {
                    Ok(values) => {
                        tracing::info!("Recovered prefs from backup: {} values", values.len());

                        if let Err(restore_err) = fs::copy(&backup_path, path) {
                            tracing::error!(
                                "Failed to restore prefs file from backup: {}",
                                restore_err
                            );
                        }

                        Ok(values)
                    }
                    Err(backup_err) => {
                        tracing::error!(
                            "Backup also corrupted: {}. Starting with empty prefs.",
                            backup_err
                        );
                        Ok(HashMap::new())
                    }
                }
            }
            Err(e) => Err(e),
        }
    }

    /// Load prefs from a single file
    fn load_prefs(path: &Path) -> Result<HashMap<String, i32>, Error> {
        if !path.exists() {
            tracing::debug!("Prefs file does not exist: {}", path.display());
            return Ok(HashMap::new());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            Error::store(format!(
                "Failed to read prefs file {}: {}",
                path.display(),
                e
            ))
        })?;

        let prefs_file: PrefsFileFormat = serde_json::from_str(&content)?;

        if prefs_file.version != PREFS_FILE_VERSION {
            tracing::warn!(
                "Prefs file version mismatch: expected {}, got {}. Attempting to load anyway.",
                PREFS_FILE_VERSION,
                prefs_file.version
            );
        }

        Ok(prefs_file.prefs)
    }

    /// Write prefs to file atomically
    fn write_prefs(&self) -> Result<(), Error> {
        let json = {
            let guard = self.state.read().unwrap();
            let prefs_file = PrefsFileFormat {
                version: PREFS_FILE_VERSION.to_string(),
                prefs: guard.values.clone(),
            };
            serde_json::to_string_pretty(&prefs_file)?
        };

        // Write to a temporary file first
        let temp_path = self.temp_path();
        {
            let mut file = fs::File::create(&temp_path).map_err(|e| {
                Error::store(format!(
                    "Failed to create temp file {}: {}",
                    temp_path.display(),
                    e
                ))
            })?;

            file.write_all(json.as_bytes()).map_err(|e| {
                Error::store(format!(
                    "Failed to write temp file {}: {}",
                    temp_path.display(),
                    e
                ))
            })?;

            file.sync_all().map_err(|e| {
                Error::store(format!(
                    "Failed to sync temp file {}: {}",
                    temp_path.display(),
                    e
                ))
            })?;
        }

        // Keep a backup of the current file before replacing it
        if self.path.exists() {
            let backup_path = Self::backup_path(&self.path);
            if let Err(e) = fs::copy(&self.path, &backup_path) {
                tracing::warn!("Failed to create backup: {}", e);
            }
        }

        // Atomic rename (temp -> actual)
        fs::rename(&temp_path, &self.path).map_err(|e| {
            Error::store(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            ))
        })?;

        self.state.write().unwrap().dirty = false;
        tracing::trace!("Prefs written to file: {}", self.path.display());
        Ok(())
    }

    /// Persist after a mutation, logging rather than surfacing failures
    fn persist_after_mutation(&self) {
        if let Err(e) = self.write_prefs() {
            tracing::error!("Failed to persist prefs, keeping in-memory value: {}", e);
        }
    }

    /// Path to the temporary file used for atomic writes
    fn temp_path(&self) -> PathBuf {
        let mut temp = self.path.clone();
        temp.set_extension("tmp");
        temp
    }

    /// Path to the backup file
    fn backup_path(path: &Path) -> PathBuf {
        let mut backup = path.to_path_buf();
        backup.set_extension("backup");
        backup
    }

    /// Write any pending changes to disk
    pub fn flush(&self) -> Result<(), Error> {
        if self.state.read().unwrap().dirty {
            self.write_prefs()
        } else {
            Ok(())
        }
    }
}

impl PrefStore for FilePrefStore {
    fn register_integer_pref(&self, key: &str, default: i32) {
        let mut guard = self.state.write().unwrap();
        if guard.defaults.insert(key.to_string(), default).is_some() {
            panic!("pref {key} registered twice");
        }
    }

    fn get_integer(&self, key: &str) -> i32 {
        let guard = self.state.read().unwrap();
        if !guard.defaults.contains_key(key) {
            panic!("pref {key} accessed before registration");
        }
        match guard.values.get(key) {
            Some(value) => *value,
            None => guard.defaults[key],
        }
    }

    fn set_integer(&self, key: &str, value: i32) {
        {
            let mut guard = self.state.write().unwrap();
            if !guard.defaults.contains_key(key) {
                panic!("pref {key} accessed before registration");
            }
            guard.values.insert(key.to_string(), value);
            guard.dirty = true;
        }

        self.persist_after_mutation();
    }

    fn clear_pref(&self, key: &str) {
        let changed = {
            let mut guard = self.state.write().unwrap();
            if !guard.defaults.contains_key(key) {
                panic!("pref {key} accessed before registration");
            }
            let removed = guard.values.remove(key).is_some();
            guard.dirty |= removed;
            removed
        };

        if changed {
            self.persist_after_mutation();
        }
    }

    fn is_registered(&self, key: &str) -> bool {
        self.state.read().unwrap().defaults.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("local_state.json");

        let store = FilePrefStore::new(&path).unwrap();
        store.register_integer_pref("a.b", 0);
        store.set_integer("a.b", 3);
        assert!(path.exists());

        // A new instance sees the persisted value
        let store2 = FilePrefStore::new(&path).unwrap();
        store2.register_integer_pref("a.b", 0);
        assert_eq!(store2.get_integer("a.b"), 3);
    }

    #[test]
    fn test_defaults_are_not_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("local_state.json");

        let store = FilePrefStore::new(&path).unwrap();
        store.register_integer_pref("a.b", 7);

        // Registration alone writes nothing
        assert!(!path.exists());

        // Setting then clearing leaves an empty prefs map on disk
        store.set_integer("a.b", 1);
        store.clear_pref("a.b");

        let content = fs::read_to_string(&path).unwrap();
        let parsed: PrefsFileFormat = serde_json::from_str(&content).unwrap();
        assert!(parsed.prefs.is_empty());

        // And a fresh load reads the default again
        let store2 = FilePrefStore::new(&path).unwrap();
        store2.register_integer_pref("a.b", 7);
        assert_eq!(store2.get_integer("a.b"), 7);
    }

    #[test]
    fn test_corruption_recovery_from_backup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("local_state.json");

        let store = FilePrefStore::new(&path).unwrap();
        store.register_integer_pref("a.b", 0);

        // Two writes so the backup holds the first value
        store.set_integer("a.b", 1);
        store.set_integer("a.b", 2);

        let backup_path = FilePrefStore::backup_path(&path);
        assert!(backup_path.exists(), "backup file should exist after write");

        fs::write(&path, b"corrupted json data").unwrap();

        // Load recovers the backup state (the value before the last write)
        let store2 = FilePrefStore::new(&path).unwrap();
        store2.register_integer_pref("a.b", 0);
        assert_eq!(store2.get_integer("a.b"), 1);
    }

    #[test]
    fn test_corruption_without_backup_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("local_state.json");

        fs::write(&path, b"{ not json").unwrap();

        let store = FilePrefStore::new(&path).unwrap();
        store.register_integer_pref("a.b", 4);
        assert_eq!(store.get_integer("a.b"), 4);
    }

    #[test]
    fn test_flush_is_noop_when_clean() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("local_state.json");

        let store = FilePrefStore::new(&path).unwrap();
        store.register_integer_pref("a.b", 0);
        store.flush().unwrap();

        // No mutation happened, so nothing was written
        assert!(!path.exists());
    }
}
