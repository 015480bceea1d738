//! Contract Test: Registration Defaults & Store-Unavailable Fallback
//!
//! Constraints verified:
//! - A freshly registered local state classifies every naming system as Ask
//! - Enabling one system does not leak into the others
//! - A detached (absent) local state reads as disabled, never an error
//! - Classifying a policy performs no writes
//!
//! If this test fails, policy defaults or the degraded-store path are broken.

mod common;

use common::*;
use dweb_dns_core::{
    NamingSystem, ResolveMethod, is_resolve_method_ask, is_resolve_method_enabled,
    register_local_state_prefs, resolve_method, set_resolve_method,
};
use dweb_dns_core::traits::PrefStore;

#[test]
fn fresh_local_state_defaults_to_ask() {
    let store = registered_store();

    for system in NamingSystem::ALL {
        assert!(
            is_resolve_method_ask(Some(&store), system),
            "{system:?} should default to Ask"
        );
        assert!(
            !is_resolve_method_enabled(Some(&store), system),
            "{system:?} should not default to Enabled"
        );
        assert_eq!(resolve_method(&store, system), ResolveMethod::Ask);
    }
}

#[test]
fn registration_covers_all_four_prefs() {
    let store = CountingPrefStore::new();
    register_local_state_prefs(&store);

    assert_eq!(store.register_call_count(), 4);
    for system in NamingSystem::ALL {
        assert!(store.is_registered(system.pref_key()));
    }
    assert!(store.is_registered(dweb_dns_core::model::ENS_OFFCHAIN_RESOLVE_METHOD));
}

#[test]
fn enabling_one_system_leaves_others_untouched() {
    let store = registered_store();

    set_resolve_method(&store, NamingSystem::UnstoppableDomains, ResolveMethod::Enabled);

    assert!(is_resolve_method_enabled(
        Some(&store),
        NamingSystem::UnstoppableDomains
    ));
    assert!(!is_resolve_method_ask(
        Some(&store),
        NamingSystem::UnstoppableDomains
    ));

    for system in [NamingSystem::Ens, NamingSystem::Sns] {
        assert!(is_resolve_method_ask(Some(&store), system));
        assert!(!is_resolve_method_enabled(Some(&store), system));
    }
}

#[test]
fn disabled_policy_is_neither_ask_nor_enabled() {
    let store = registered_store();

    set_resolve_method(&store, NamingSystem::Sns, ResolveMethod::Disabled);

    assert!(!is_resolve_method_ask(Some(&store), NamingSystem::Sns));
    assert!(!is_resolve_method_enabled(Some(&store), NamingSystem::Sns));
    assert_eq!(
        resolve_method(&store, NamingSystem::Sns),
        ResolveMethod::Disabled
    );
}

#[test]
fn detached_local_state_reads_as_disabled() {
    for system in NamingSystem::ALL {
        assert!(!is_resolve_method_ask(None, system));
        assert!(!is_resolve_method_enabled(None, system));
    }
}

#[test]
fn classification_performs_no_writes() {
    let store = registered_counting_store();

    for system in NamingSystem::ALL {
        let _ = is_resolve_method_ask(Some(&store), system);
        let _ = is_resolve_method_enabled(Some(&store), system);
        let _ = resolve_method(&store, system);
    }

    assert_eq!(
        store.write_call_count(),
        0,
        "reading a policy must not rewrite it"
    );
}
