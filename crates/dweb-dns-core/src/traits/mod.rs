//! Core traits for the policy engine
//!
//! This module defines the capability the engine consumes:
//!
//! - [`PrefStore`]: typed integer preference storage with registered defaults

pub mod pref_store;

pub use pref_store::PrefStore;
