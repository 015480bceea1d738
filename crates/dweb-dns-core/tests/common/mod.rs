//! Test doubles and common utilities for policy contract tests
//!
//! The counting store wraps the real in-memory store and records how often
//! each mutation path runs, so tests can assert not just final state but the
//! absence of hidden writes.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use dweb_dns_core::store::MemoryPrefStore;
use dweb_dns_core::traits::PrefStore;

/// A PrefStore that tracks calls to every method
pub struct CountingPrefStore {
    inner: MemoryPrefStore,
    register_calls: AtomicUsize,
    get_calls: AtomicUsize,
    set_calls: AtomicUsize,
    clear_calls: AtomicUsize,
}

impl CountingPrefStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryPrefStore::new(),
            register_calls: AtomicUsize::new(0),
            get_calls: AtomicUsize::new(0),
            set_calls: AtomicUsize::new(0),
            clear_calls: AtomicUsize::new(0),
        }
    }

    pub fn register_call_count(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    pub fn get_call_count(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn set_call_count(&self) -> usize {
        self.set_calls.load(Ordering::SeqCst)
    }

    pub fn clear_call_count(&self) -> usize {
        self.clear_calls.load(Ordering::SeqCst)
    }

    /// Total mutations (sets + clears) observed so far
    pub fn write_call_count(&self) -> usize {
        self.set_call_count() + self.clear_call_count()
    }
}

impl Default for CountingPrefStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefStore for CountingPrefStore {
    fn register_integer_pref(&self, key: &str, default: i32) {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.register_integer_pref(key, default);
    }

    fn get_integer(&self, key: &str) -> i32 {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_integer(key)
    }

    fn set_integer(&self, key: &str, value: i32) {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.set_integer(key, value);
    }

    fn clear_pref(&self, key: &str) {
        self.clear_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.clear_pref(key);
    }

    fn is_registered(&self, key: &str) -> bool {
        self.inner.is_registered(key)
    }
}

/// A fresh in-memory store with all four prefs registered
pub fn registered_store() -> MemoryPrefStore {
    let store = MemoryPrefStore::new();
    dweb_dns_core::register_local_state_prefs(&store);
    store
}

/// A fresh counting store with all four prefs registered
pub fn registered_counting_store() -> CountingPrefStore {
    let store = CountingPrefStore::new();
    dweb_dns_core::register_local_state_prefs(&store);
    store
}
