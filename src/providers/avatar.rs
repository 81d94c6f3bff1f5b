//! Avatar path resolution.
//!
//! The users endpoint may send avatars as paths relative to the server
//! address. [`AvatarBaseSource`] prefixes them with the configured base
//! after any caching layer, so a changed base takes effect immediately.

use async_trait::async_trait;
use reqwest::Url;

use crate::config::Config;
use crate::models::UserRecord;
use crate::providers::{SourceError, UserSource};

/// Wraps a [`UserSource`] and resolves relative avatars against a base.
pub struct AvatarBaseSource<S> {
    inner: S,
    base: Option<Url>,
}

impl<S: UserSource> AvatarBaseSource<S> {
    /// Pass avatars through unchanged.
    pub fn passthrough(inner: S) -> Self {
        Self { inner, base: None }
    }

    /// Resolve relative avatars against `base`.
    pub fn new(inner: S, base: &str) -> Result<Self, SourceError> {
        let parsed = Url::parse(base).map_err(|e| SourceError::InvalidUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            inner,
            base: Some(parsed),
        })
    }

    /// Use `[avatar] base_url` when configured.
    pub fn from_config(inner: S, config: &Config) -> Result<Self, SourceError> {
        match config.avatar.base_url.as_deref() {
            Some(base) => Self::new(inner, base),
            None => Ok(Self::passthrough(inner)),
        }
    }
}

#[async_trait]
impl<S: UserSource> UserSource for AvatarBaseSource<S> {
    async fn fetch_users(&self, url: &str) -> Result<Vec<UserRecord>, SourceError> {
        let mut users = self.inner.fetch_users(url).await?;
        if let Some(ref base) = self.base {
            for user in &mut users {
                if let Some(avatar) = user.avatar.take() {
                    user.avatar = Some(resolve_avatar(base, &avatar));
                }
            }
        }
        Ok(users)
    }
}

/// Resolve an avatar reference against the server address.
///
/// Absolute `http(s)` URLs and empty values are returned unchanged. Any
/// other value is appended to the base, keeping the base's own path:
/// `http://h/intranet` + `/api/images/1` → `http://h/intranet/api/images/1`.
pub fn resolve_avatar(base: &Url, avatar: &str) -> String {
    if avatar.is_empty() || avatar.starts_with("http://") || avatar.starts_with("https://") {
        return avatar.to_string();
    }
    let prefix = base.as_str().trim_end_matches('/');
    if avatar.starts_with('/') {
        format!("{prefix}{avatar}")
    } else {
        format!("{prefix}/{avatar}")
    }
}
