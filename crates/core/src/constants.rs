//! Application-wide constants.

/// Namespace prefix shared by every key that participates in cloud sync.
/// Keys outside this prefix are never collected into or removed by a
/// snapshot operation.
pub const KEY_PREFIX: &str = "lifeplan";

/// Prefix for the local fallback copies of the domain collections.
pub const FALLBACK_PREFIX: &str = "lifeplan:fallback";

/// Number of date keys per batched range query against the remote backend.
pub const RANGE_CHUNK_SIZE: usize = 80;

/// Debounce window before a scheduled cloud push fires, in milliseconds.
pub const PUSH_DEBOUNCE_MS: u64 = 700;

/// Delay used when re-scheduling a push after the network comes back online.
pub const ONLINE_FLUSH_MS: u64 = 1_500;

/// Fixed id of the singleton current-brand document.
pub const CURRENT_BRAND_ID: &str = "current";

/// Fixed id of the singleton settings document.
pub const SETTINGS_DOC_ID: &str = "app";
