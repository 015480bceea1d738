// # Preference Store Implementations
//
// This module provides implementations of the PrefStore trait for
// different persistence strategies.

pub mod file;
pub mod memory;

pub use file::FilePrefStore;
pub use memory::MemoryPrefStore;
