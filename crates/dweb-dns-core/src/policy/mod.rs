//! Policy resolution for decentralized naming systems
//!
//! The resolver reads the injected preference store and classifies the
//! user's configured policy per naming system. Startup order matters:
//!
//! 1. [`register_local_state_prefs`] declares the four prefs with defaults
//! 2. [`migration::migrate_obsolete_local_state_prefs`] rewrites retired values
//! 3. The network stack and UI query the predicates below
//!
//! The binary predicates take `Option<&dyn PrefStore>`: a detached local
//! state is an expected condition during early startup and teardown, and it
//! reads as "disabled", never as an error.
//!
//! All reads here are pure. In particular, reading the ENS offchain policy
//! must not rewrite it: an earlier implementation of this logic overwrote
//! the stored value with `Enabled` inside its getters, which made the `Ask`
//! and `Disabled` states unstable.

pub mod migration;

use crate::model::{
    ENS_OFFCHAIN_RESOLVE_METHOD, EnsOffchainResolveMethod, NamingSystem, ResolveMethod,
};
use crate::traits::PrefStore;

/// Register the four local-state prefs with their defaults.
///
/// Call once at profile/local-state initialization, before migration and
/// before any policy query. Re-registration is a contract violation the
/// store itself guards.
pub fn register_local_state_prefs(local_state: &dyn PrefStore) {
    for system in NamingSystem::ALL {
        local_state.register_integer_pref(
            system.pref_key(),
            ResolveMethod::DEFAULT.as_pref_value(),
        );
    }
    local_state.register_integer_pref(
        ENS_OFFCHAIN_RESOLVE_METHOD,
        EnsOffchainResolveMethod::DEFAULT.as_pref_value(),
    );
}

/// True iff the stored policy for `system` is exactly `Ask`.
///
/// A detached local state reads as disabled: `false`, never an error. A
/// stored value outside the known encodings also answers `false`.
pub fn is_resolve_method_ask(local_state: Option<&dyn PrefStore>, system: NamingSystem) -> bool {
    match local_state {
        None => false, // Treat it as disabled.
        Some(store) => {
            store.get_integer(system.pref_key()) == ResolveMethod::Ask.as_pref_value()
        }
    }
}

/// True iff the stored policy for `system` is exactly `Enabled`.
///
/// Same detached-store fallback as [`is_resolve_method_ask`].
pub fn is_resolve_method_enabled(
    local_state: Option<&dyn PrefStore>,
    system: NamingSystem,
) -> bool {
    match local_state {
        None => false, // Treat it as disabled.
        Some(store) => {
            store.get_integer(system.pref_key()) == ResolveMethod::Enabled.as_pref_value()
        }
    }
}

/// Typed read of `system`'s resolve method.
///
/// A stored integer outside the known encodings reads as the registration
/// default (`Ask`).
pub fn resolve_method(local_state: &dyn PrefStore, system: NamingSystem) -> ResolveMethod {
    ResolveMethod::from_pref_value(local_state.get_integer(system.pref_key()))
        .unwrap_or(ResolveMethod::DEFAULT)
}

/// Typed write of `system`'s resolve method.
///
/// This is the write path behind the (external) policy-change UI.
pub fn set_resolve_method(
    local_state: &dyn PrefStore,
    system: NamingSystem,
    method: ResolveMethod,
) {
    local_state.set_integer(system.pref_key(), method.as_pref_value());
}

/// Currently stored ENS offchain resolve method.
///
/// Pure read: never modifies the stored value. An out-of-range stored
/// integer reads as the registration default (`Ask`).
pub fn get_ens_offchain_resolve_method(local_state: &dyn PrefStore) -> EnsOffchainResolveMethod {
    EnsOffchainResolveMethod::from_pref_value(local_state.get_integer(ENS_OFFCHAIN_RESOLVE_METHOD))
        .unwrap_or(EnsOffchainResolveMethod::DEFAULT)
}

/// Store `method` as the ENS offchain resolve method.
///
/// Touches no other pref.
pub fn set_ens_offchain_resolve_method(
    local_state: &dyn PrefStore,
    method: EnsOffchainResolveMethod,
) {
    local_state.set_integer(ENS_OFFCHAIN_RESOLVE_METHOD, method.as_pref_value());
}
