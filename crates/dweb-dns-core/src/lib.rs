// # dweb-dns-core
//
// Core library for decentralized naming policy decisions.
//
// A browser that supports alternative naming systems (Unstoppable Domains,
// ENS, SNS) has to decide, per hostname, whether the name is in scope for a
// given system and what the user's configured resolution policy for that
// system is. This crate holds exactly that decision logic:
//
// - **PrefStore**: Trait for the profile-backed integer preference store
// - **TLD matcher**: Suffix membership tests per naming system
// - **Policy resolver**: Classifies the stored policy as Ask/Enabled/Disabled
// - **Migration**: One-time rewrite of retired stored values at startup
//
// ## Design Principles
//
// 1. **Store is injected**: Every policy function takes the preference store
//    as an explicit parameter; there is no ambient global state
// 2. **Synchronous**: Every operation is a direct local read or write with no
//    suspension points
// 3. **Reads are pure**: Classifying a policy never rewrites it
// 4. **Stable encodings**: The integer values persisted for each enum are a
//    frozen contract; user profiles survive upgrades byte-for-byte
//
// The actual network-level resolvers and the UI that prompts the user for a
// policy live elsewhere; they consume this crate.

pub mod config;
pub mod error;
pub mod exposed;
pub mod model;
pub mod policy;
pub mod store;
pub mod tld;
pub mod traits;

// Re-export core types for convenience
pub use config::LocalStateConfig;
pub use error::{Error, Result};
pub use model::{EnsOffchainResolveMethod, NamingSystem, NamingSystemConfig, ResolveMethod};
pub use policy::migration::migrate_obsolete_local_state_prefs;
pub use policy::{
    get_ens_offchain_resolve_method, is_resolve_method_ask, is_resolve_method_enabled,
    register_local_state_prefs, resolve_method, set_ens_offchain_resolve_method,
    set_resolve_method,
};
pub use store::{FilePrefStore, MemoryPrefStore};
pub use tld::{is_ens_tld, is_naming_system_tld, is_sns_tld, is_unstoppable_domains_tld};
pub use traits::PrefStore;
