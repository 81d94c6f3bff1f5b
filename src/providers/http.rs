//! reqwest-backed user source.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::Config;
use crate::models::UserRecord;
use crate::providers::{SourceError, UserSource};

/// Fetches users over HTTP. Records are returned exactly as decoded;
/// avatar resolution happens in [`super::avatar::AvatarBaseSource`].
pub struct HttpUserSource {
    client: reqwest::Client,
}

impl HttpUserSource {
    /// Build a source with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!(
                "{}/{}",
                crate::constants::APP_NAME,
                crate::constants::VERSION
            ))
            .build()
            .map_err(|e| SourceError::Client(e.to_string()))?;
        Ok(Self { client })
    }

    /// Build a source from the `[source]` config section.
    pub fn from_config(config: &Config) -> Result<Self, SourceError> {
        Self::new(config.source.timeout())
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_users(&self, url: &str) -> Result<Vec<UserRecord>, SourceError> {
        tracing::debug!(url, "fetching users");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Request {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let users: Vec<UserRecord> = response.json().await.map_err(|e| SourceError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(url, count = users.len(), "users fetched");
        Ok(users)
    }
}
