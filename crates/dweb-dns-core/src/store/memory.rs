// # Memory Preference Store
//
// In-memory implementation of PrefStore.
//
// ## Purpose
//
// Provides a simple, fast store with no persistence across restarts. Useful
// for tests and for ephemeral (incognito-style) profiles where policy
// choices should not outlive the session.
//
// ## Semantics
//
// Registered defaults and explicitly-set values are tracked separately, so
// `clear_pref` genuinely reverts to the registered default instead of
// deleting the pref.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::traits::PrefStore;

#[derive(Debug, Default)]
struct PrefMap {
    defaults: HashMap<String, i32>,
    values: HashMap<String, i32>,
}

/// In-memory preference store
///
/// # Example
///
/// ```rust
/// use dweb_dns_core::store::MemoryPrefStore;
/// use dweb_dns_core::traits::PrefStore;
///
/// let store = MemoryPrefStore::new();
/// store.register_integer_pref("example.pref", 7);
/// assert_eq!(store.get_integer("example.pref"), 7);
///
/// store.set_integer("example.pref", 1);
/// assert_eq!(store.get_integer("example.pref"), 1);
///
/// store.clear_pref("example.pref");
/// assert_eq!(store.get_integer("example.pref"), 7);
/// ```
#[derive(Debug, Default)]
pub struct MemoryPrefStore {
    inner: RwLock<PrefMap>,
}

impl MemoryPrefStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered prefs
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().defaults.len()
    }

    /// Whether any prefs have been registered
    pub fn is_empty(&self) -> bool {
        self.inner.read().unwrap().defaults.is_empty()
    }
}

impl PrefStore for MemoryPrefStore {
    fn register_integer_pref(&self, key: &str, default: i32) {
        let mut guard = self.inner.write().unwrap();
        if guard.defaults.insert(key.to_string(), default).is_some() {
            panic!("pref {key} registered twice");
        }
    }

    fn get_integer(&self, key: &str) -> i32 {
        let guard = self.inner.read().unwrap();
        match guard.values.get(key).or_else(|| guard.defaults.get(key)) {
            Some(value) => *value,
            None => panic!("pref {key} accessed before registration"),
        }
    }

    fn set_integer(&self, key: &str, value: i32) {
        let mut guard = self.inner.write().unwrap();
        if !guard.defaults.contains_key(key) {
            panic!("pref {key} accessed before registration");
        }
        guard.values.insert(key.to_string(), value);
    }

    fn clear_pref(&self, key: &str) {
        let mut guard = self.inner.write().unwrap();
        if !guard.defaults.contains_key(key) {
            panic!("pref {key} accessed before registration");
        }
        guard.values.remove(key);
    }

    fn is_registered(&self, key: &str) -> bool {
        self.inner.read().unwrap().defaults.contains_key(key)
    }
}
