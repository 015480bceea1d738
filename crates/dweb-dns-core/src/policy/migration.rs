//! One-time migration of retired preference values
//!
//! A DNS-over-HTTPS resolve method shipped briefly for Unstoppable Domains
//! and ENS and was later retired. Profiles that still store it are reset to
//! the registered default the first time the engine starts.

use tracing::info;

use crate::model::{NamingSystem, ResolveMethod};
use crate::traits::PrefStore;

/// The two systems that ever stored the retired value. SNS shipped after the
/// retirement and ENS-offchain uses a different enum, so neither is touched.
const MIGRATABLE_SYSTEMS: [NamingSystem; 2] =
    [NamingSystem::UnstoppableDomains, NamingSystem::Ens];

/// Rewrite retired stored values back to their registered defaults.
///
/// Runs once per startup, after [`register_local_state_prefs`] and before
/// any policy query. Idempotent: once a pref no longer holds the retired
/// encoding, further passes leave it untouched. If no local state is
/// attached yet, the caller simply does not invoke this.
///
/// [`register_local_state_prefs`]: crate::policy::register_local_state_prefs
pub fn migrate_obsolete_local_state_prefs(local_state: &dyn PrefStore) {
    for system in MIGRATABLE_SYSTEMS {
        let key = system.pref_key();
        if local_state.get_integer(key)
            == ResolveMethod::DeprecatedDnsOverHttps.as_pref_value()
        {
            local_state.clear_pref(key);
            info!(pref = key, "cleared retired resolve-method value");
        }
    }
}
