//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables
//! 3. `.userpick.toml` in the working directory
//! 4. `~/.config/userpick/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::constants;
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub avatar: AvatarConfig,
    pub cache: CacheConfig,
}

/// Where and how the user list is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: constants::DEFAULT_USERS_URL.to_string(),
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Avatar URL resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    /// Server address that relative avatar paths are joined onto,
    /// e.g. `https://intranet.example.com:443`.
    pub base_url: Option<String>,
}

/// Result cache configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_secs: constants::DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, the local config in `work_dir`, then
    /// applies environment variable overrides.
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: local config
        if let Some(dir) = work_dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for non-default values).
    fn merge(&mut self, other: Config) {
        let default_source = SourceConfig::default();
        if other.source.url != default_source.url {
            self.source.url = other.source.url;
        }
        if other.source.timeout_secs != default_source.timeout_secs {
            self.source.timeout_secs = other.source.timeout_secs;
        }

        if other.avatar.base_url.is_some() {
            self.avatar.base_url = other.avatar.base_url;
        }

        // Disabled overrides enabled
        if !other.cache.enabled {
            self.cache.enabled = false;
        }
        if other.cache.ttl_secs != CacheConfig::default().ttl_secs {
            self.cache.ttl_secs = other.cache.ttl_secs;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(constants::ENV_URL) {
            if !val.trim().is_empty() {
                self.source.url = val.trim().to_string();
            }
        }
        if let Ok(val) = env.var(constants::ENV_AVATAR_BASE_URL) {
            if !val.trim().is_empty() {
                self.avatar.base_url = Some(val.trim().to_string());
            }
        }
        match env.parsed::<u64>(constants::ENV_TIMEOUT_SECS) {
            Some(Ok(secs)) => self.source.timeout_secs = secs,
            Some(Err(raw)) => {
                tracing::warn!("ignoring invalid {} value: {raw}", constants::ENV_TIMEOUT_SECS)
            }
            None => {}
        }
        match env.parsed::<u64>(constants::ENV_CACHE_TTL_SECS) {
            Some(Ok(secs)) => self.cache.ttl_secs = secs,
            Some(Err(raw)) => {
                tracing::warn!("ignoring invalid {} value: {raw}", constants::ENV_CACHE_TTL_SECS)
            }
            None => {}
        }
    }
}
