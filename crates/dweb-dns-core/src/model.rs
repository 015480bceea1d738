//! Policy model for decentralized naming systems
//!
//! Defines the resolve-method enums persisted to the preference store, the
//! preference keys they are stored under, and the static descriptor for each
//! supported naming system.
//!
//! ## Persistence contract
//!
//! Preference values are stored as plain integers and the keys below are the
//! identifiers the store persists them under. Both are frozen: changing an
//! encoding or a key would silently reinterpret or orphan every existing
//! user profile.

/// Pref key for the Unstoppable Domains resolve method
pub const UNSTOPPABLE_DOMAINS_RESOLVE_METHOD: &str =
    "dweb_dns.unstoppable_domains.resolve_method";

/// Pref key for the ENS resolve method
pub const ENS_RESOLVE_METHOD: &str = "dweb_dns.ens.resolve_method";

/// Pref key for the ENS offchain (gateway fallback) resolve method
pub const ENS_OFFCHAIN_RESOLVE_METHOD: &str = "dweb_dns.ens.offchain_resolve_method";

/// Pref key for the SNS resolve method
pub const SNS_RESOLVE_METHOD: &str = "dweb_dns.sns.resolve_method";

/// Domain suffixes served by Unstoppable Domains
pub const UNSTOPPABLE_DOMAIN_SUFFIXES: &[&str] = &[
    ".crypto",
    ".x",
    ".coin",
    ".nft",
    ".dao",
    ".wallet",
    ".888",
    ".blockchain",
    ".bitcoin",
    ".zil",
];

/// Domain suffix served by ENS
pub const ETH_SUFFIX: &str = ".eth";

/// Domain suffix served by SNS
pub const SOL_SUFFIX: &str = ".sol";

/// User policy for resolving names in a naming system.
///
/// `DeprecatedDnsOverHttps` is a retired option kept only so migration can
/// detect profiles that still carry it; it is never a valid post-migration
/// state. See [`migrate_obsolete_local_state_prefs`].
///
/// [`migrate_obsolete_local_state_prefs`]: crate::policy::migration::migrate_obsolete_local_state_prefs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveMethod {
    /// Prompt the user before resolving
    Ask,
    /// Never resolve
    Disabled,
    /// Retired DNS-over-HTTPS option, migration sentinel only
    DeprecatedDnsOverHttps,
    /// Resolve without prompting
    Enabled,
}

impl ResolveMethod {
    /// Value registered as the default for every resolve-method pref
    pub const DEFAULT: ResolveMethod = ResolveMethod::Ask;

    /// Stable integer encoding persisted by the preference store
    pub fn as_pref_value(self) -> i32 {
        match self {
            ResolveMethod::Ask => 0,
            ResolveMethod::Disabled => 1,
            ResolveMethod::DeprecatedDnsOverHttps => 2,
            ResolveMethod::Enabled => 3,
        }
    }

    /// Decode a stored integer; `None` if it is not a known encoding
    pub fn from_pref_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(ResolveMethod::Ask),
            1 => Some(ResolveMethod::Disabled),
            2 => Some(ResolveMethod::DeprecatedDnsOverHttps),
            3 => Some(ResolveMethod::Enabled),
            _ => None,
        }
    }
}

impl Default for ResolveMethod {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// User policy for ENS lookups that need a centralized gateway.
///
/// Offchain resolution leaks the queried name to the gateway operator, so it
/// carries its own policy independent of the main ENS resolve method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnsOffchainResolveMethod {
    /// Prompt the user before the gateway lookup
    Ask,
    /// Allow gateway lookups without prompting
    Enabled,
    /// Never fall back to a gateway
    Disabled,
}

impl EnsOffchainResolveMethod {
    /// Value registered as the default for the offchain pref
    pub const DEFAULT: EnsOffchainResolveMethod = EnsOffchainResolveMethod::Ask;

    /// Stable integer encoding persisted by the preference store
    pub fn as_pref_value(self) -> i32 {
        match self {
            EnsOffchainResolveMethod::Ask => 0,
            EnsOffchainResolveMethod::Enabled => 1,
            EnsOffchainResolveMethod::Disabled => 2,
        }
    }

    /// Decode a stored integer; `None` if it is not a known encoding
    pub fn from_pref_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(EnsOffchainResolveMethod::Ask),
            1 => Some(EnsOffchainResolveMethod::Enabled),
            2 => Some(EnsOffchainResolveMethod::Disabled),
            _ => None,
        }
    }
}

impl Default for EnsOffchainResolveMethod {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A supported alternative naming system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingSystem {
    /// Unstoppable Domains (`.crypto`, `.x`, ...)
    UnstoppableDomains,
    /// Ethereum Name Service (`.eth`)
    Ens,
    /// Solana Name Service (`.sol`)
    Sns,
}

impl NamingSystem {
    /// All supported systems, in registration order
    pub const ALL: [NamingSystem; 3] = [
        NamingSystem::UnstoppableDomains,
        NamingSystem::Ens,
        NamingSystem::Sns,
    ];

    /// Static descriptor for this system
    pub fn config(self) -> &'static NamingSystemConfig {
        match self {
            NamingSystem::UnstoppableDomains => &NAMING_SYSTEMS[0],
            NamingSystem::Ens => &NAMING_SYSTEMS[1],
            NamingSystem::Sns => &NAMING_SYSTEMS[2],
        }
    }

    /// Pref key holding this system's resolve method
    pub fn pref_key(self) -> &'static str {
        self.config().pref_key
    }

    /// Domain suffixes this system serves
    pub fn tld_suffixes(self) -> &'static [&'static str] {
        self.config().tld_suffixes
    }
}

/// Static description of one naming system: where its policy is stored and
/// which domain suffixes it serves. The current policy value itself lives in
/// the preference store, read through [`resolve_method`].
///
/// [`resolve_method`]: crate::policy::resolve_method
#[derive(Debug)]
pub struct NamingSystemConfig {
    /// Which system this describes
    pub system: NamingSystem,
    /// Pref key for the system's resolve method
    pub pref_key: &'static str,
    /// Recognized domain suffixes
    pub tld_suffixes: &'static [&'static str],
}

/// Descriptors for all supported naming systems
pub static NAMING_SYSTEMS: [NamingSystemConfig; 3] = [
    NamingSystemConfig {
        system: NamingSystem::UnstoppableDomains,
        pref_key: UNSTOPPABLE_DOMAINS_RESOLVE_METHOD,
        tld_suffixes: UNSTOPPABLE_DOMAIN_SUFFIXES,
    },
    NamingSystemConfig {
        system: NamingSystem::Ens,
        pref_key: ENS_RESOLVE_METHOD,
        tld_suffixes: &[ETH_SUFFIX],
    },
    NamingSystemConfig {
        system: NamingSystem::Sns,
        pref_key: SNS_RESOLVE_METHOD,
        tld_suffixes: &[SOL_SUFFIX],
    },
];
