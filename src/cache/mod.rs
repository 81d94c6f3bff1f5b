//! Time-bounded result cache for user sources.
//!
//! A fetched user list is reused while it is younger than the configured
//! TTL, so repeated invocations do not hit the endpoint every time.

pub mod store;

use std::time::Duration;

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tokio::sync::Mutex;

use crate::models::UserRecord;
use crate::providers::{SourceError, UserSource};

pub use store::{CacheEntry, CacheStats, FileStore};

/// Compute a cache key from the endpoint URL.
pub fn cache_key(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.trim().as_bytes());
    hex::encode(hasher.finalize())
}

/// Wraps a [`UserSource`] and serves fresh cached results.
///
/// Only successful fetches are stored. A zero TTL disables lookups.
pub struct CachedUserSource<S> {
    inner: S,
    store: FileStore,
    ttl: Duration,
    /// Serialises lookups so concurrent callers share one fetch.
    lock: Mutex<()>,
}

impl<S: UserSource> CachedUserSource<S> {
    pub fn new(inner: S, store: FileStore, ttl: Duration) -> Self {
        Self {
            inner,
            store,
            ttl,
            lock: Mutex::new(()),
        }
    }

    fn fresh(&self, key: &str) -> Option<Vec<UserRecord>> {
        if self.ttl.is_zero() {
            return None;
        }
        let entry = self.store.get(key)?;
        (entry.age_secs(store::unix_now()) < self.ttl.as_secs()).then_some(entry.users)
    }
}

#[async_trait]
impl<S: UserSource> UserSource for CachedUserSource<S> {
    async fn fetch_users(&self, url: &str) -> Result<Vec<UserRecord>, SourceError> {
        let _guard = self.lock.lock().await;
        let key = cache_key(url);

        if let Some(users) = self.fresh(&key) {
            tracing::debug!(url, count = users.len(), "serving users from cache");
            return Ok(users);
        }

        let users = self.inner.fetch_users(url).await?;
        if !self.ttl.is_zero() {
            self.store.put(&key, &users);
        }
        Ok(users)
    }
}
