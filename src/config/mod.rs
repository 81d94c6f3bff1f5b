//! Configuration loading and layering.
//!
//! Handles `.userpick.toml` loading, environment variable resolution,
//! and CLI flag merging with proper priority ordering.

pub mod loader;

pub use loader::{AvatarConfig, CacheConfig, Config, ConfigError, SourceConfig};
