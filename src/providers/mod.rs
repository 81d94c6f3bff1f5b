//! UserSource trait and HTTP integration.
//!
//! Provides an abstraction layer over the users endpoint so the picker
//! can be driven by reqwest in production and by canned data in tests.

pub mod avatar;
pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::UserRecord;

/// Errors from a user source.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode users from {url}: {reason}")]
    Decode { url: String, reason: String },

    #[error("failed to set up HTTP client: {0}")]
    Client(String),

    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Asynchronous "GET url → list of users".
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch the user list, preserving the order the endpoint returned.
    async fn fetch_users(&self, url: &str) -> Result<Vec<UserRecord>, SourceError>;
}
