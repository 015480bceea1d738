// # Preference Store Trait
//
// Defines the interface for the profile-backed integer preference store the
// policy engine reads and writes.
//
// ## Purpose
//
// The store holds the durable per-profile policy state:
// - One integer value per registered pref key
// - A default declared at registration time
// - Clearing a pref reverts it to that default
//
// ## Implementations
//
// - Memory-backed: `store::MemoryPrefStore` (tests, ephemeral profiles)
// - File-backed: `store::FilePrefStore` (JSON local state on disk)
// - Embedders may wrap their own settings machinery behind this trait
//
// ## Contract
//
// Registration happens exactly once per key, at profile initialization,
// before any read or write. Accessing an unregistered key or registering a
// key twice is a caller bug, not a recoverable condition: implementations
// guard their contract with a panic rather than returning an error. Expected
// runtime situations (value never set, value cleared) are covered by the
// registered default and never fail.

/// Trait for preference store implementations
///
/// All values are plain integers; callers map them to and from typed enums.
/// Methods take `&self`: implementations use interior locking so concurrent
/// readers inherit per-operation atomicity from the store, nothing more.
///
/// # Thread Safety
///
/// Implementations must be safe to share across threads.
pub trait PrefStore: Send + Sync {
    /// Register `key` with its default value.
    ///
    /// The default is what [`get_integer`](Self::get_integer) returns until
    /// the pref is explicitly set, and what the pref reverts to on
    /// [`clear_pref`](Self::clear_pref). Defaults are not persisted.
    ///
    /// # Panics
    ///
    /// Panics if `key` is already registered.
    fn register_integer_pref(&self, key: &str, default: i32);

    /// Current value of `key`, or its registered default if never set.
    ///
    /// # Panics
    ///
    /// Panics if `key` was never registered.
    fn get_integer(&self, key: &str) -> i32;

    /// Set `key` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `key` was never registered.
    fn set_integer(&self, key: &str, value: i32);

    /// Drop any explicitly-set value, reverting `key` to its default.
    ///
    /// No-op if the pref is already at its default.
    ///
    /// # Panics
    ///
    /// Panics if `key` was never registered.
    fn clear_pref(&self, key: &str);

    /// Whether `key` has been registered on this store
    fn is_registered(&self, key: &str) -> bool;
}
