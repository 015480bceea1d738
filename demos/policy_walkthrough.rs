//! Embedding walkthrough for dweb-dns-core
//!
//! Demonstrates the full startup sequence an embedder runs (build a store
//! from configuration, register prefs, migrate retired values) followed by
//! the per-hostname policy decisions the network stack makes.

use anyhow::Result;
use dweb_dns_core::{
    LocalStateConfig, NamingSystem, ResolveMethod, is_naming_system_tld, is_resolve_method_ask,
    is_resolve_method_enabled, migrate_obsolete_local_state_prefs, register_local_state_prefs,
    set_resolve_method,
};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // An embedder would deserialize this from its own config file
    let config: LocalStateConfig = serde_json::from_str(r#"{ "type": "memory" }"#)?;
    let local_state = config.build()?;

    // Startup: register defaults, then migrate retired values
    register_local_state_prefs(local_state.as_ref());

    // Simulate a profile that still carries the retired DNS-over-HTTPS value
    set_resolve_method(
        local_state.as_ref(),
        NamingSystem::Ens,
        ResolveMethod::DeprecatedDnsOverHttps,
    );
    migrate_obsolete_local_state_prefs(local_state.as_ref());

    // The user has opted in to Unstoppable Domains resolution
    set_resolve_method(
        local_state.as_ref(),
        NamingSystem::UnstoppableDomains,
        ResolveMethod::Enabled,
    );

    let hostnames = [
        "example.crypto",
        "vitalik.eth",
        "wallet.sol",
        "example.com",
    ];

    for host in hostnames {
        let Some(system) = NamingSystem::ALL
            .into_iter()
            .find(|system| is_naming_system_tld(*system, host))
        else {
            info!(host, "not in scope for any decentralized naming system");
            continue;
        };

        let decision = if is_resolve_method_enabled(Some(local_state.as_ref()), system) {
            "resolve"
        } else if is_resolve_method_ask(Some(local_state.as_ref()), system) {
            "prompt the user"
        } else {
            "do not resolve"
        };

        info!(host, ?system, decision, "policy decision");
    }

    Ok(())
}
