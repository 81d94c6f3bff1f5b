//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and defaults so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "userpick";

/// Crate version, baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.userpick.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".userpick.toml";

/// Directory name under `~/.config/` for global config and cache.
pub const CONFIG_DIR: &str = "userpick";

/// Users endpoint used when nothing else is configured.
pub const DEFAULT_USERS_URL: &str = "http://localhost:5000/api/v1/users";

/// Request timeout for the users endpoint, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// How long a fetched user list stays fresh, in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 600;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_URL: &str = "USERPICK_URL";
pub const ENV_AVATAR_BASE_URL: &str = "USERPICK_AVATAR_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "USERPICK_TIMEOUT_SECS";
pub const ENV_CACHE_TTL_SECS: &str = "USERPICK_CACHE_TTL_SECS";
