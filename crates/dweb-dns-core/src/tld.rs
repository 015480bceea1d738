//! TLD membership tests for supported naming systems
//!
//! Pure suffix checks with no store or network access. Matching is a
//! case-sensitive comparison against the registered literal suffixes: hosts
//! arrive here already lowercased by the URL layer, and the registered
//! suffixes are lowercase literals.

use crate::model::NamingSystem;

/// True iff `host` ends with one of `system`'s registered domain suffixes
pub fn is_naming_system_tld(system: NamingSystem, host: &str) -> bool {
    system
        .tld_suffixes()
        .iter()
        .any(|suffix| host.ends_with(suffix))
}

/// True iff `host` ends with an Unstoppable Domains suffix such as `.crypto`
pub fn is_unstoppable_domains_tld(host: &str) -> bool {
    is_naming_system_tld(NamingSystem::UnstoppableDomains, host)
}

/// True iff `host` ends with `.eth`
pub fn is_ens_tld(host: &str) -> bool {
    is_naming_system_tld(NamingSystem::Ens, host)
}

/// True iff `host` ends with `.sol`
pub fn is_sns_tld(host: &str) -> bool {
    is_naming_system_tld(NamingSystem::Sns, host)
}
