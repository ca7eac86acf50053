//! Query cache with single-flight fetches and per-entry stale times.
//!
//! Entries are keyed by [`QueryKey`]. Concurrent reads of a missing key share
//! one fetch. Each entry expires after the stale time it was fetched with, so
//! a zero stale time means "always refetch, but still coalesce".

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use hl_client::ApiError;
use hl_config::CacheConfig;
use moka::Expiry;
use moka::future::Cache;

use crate::retry::{RetryPolicy, with_retry};

/// Hierarchical query identity, e.g. `["communities", "me"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Whether `prefix` is a leading subsequence of this key.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.0.starts_with(&prefix.0)
    }

    // -----------------------------------------------------------------------
    // Well-known keys
    // -----------------------------------------------------------------------

    /// Root of every community query; invalidated by all community mutations.
    #[must_use]
    pub fn communities() -> Self {
        Self::new(["communities"])
    }

    #[must_use]
    pub fn my_communities() -> Self {
        Self::new(["communities", "me"])
    }

    #[must_use]
    pub fn community(id: &str) -> Self {
        Self::new(["communities", id])
    }

    #[must_use]
    pub fn members(id: &str, page: u32, size: u32) -> Self {
        Self::new([
            "communities".to_string(),
            id.to_string(),
            "members".to_string(),
            page.to_string(),
            size.to_string(),
        ])
    }

    #[must_use]
    pub fn join_requests(id: &str) -> Self {
        Self::new(["communities", id, "join-requests"])
    }

    #[must_use]
    pub fn profile() -> Self {
        Self::new(["profile"])
    }

    #[must_use]
    pub fn verification_status() -> Self {
        Self::new(["verification-status"])
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

#[derive(Clone)]
struct Entry {
    value: Arc<dyn Any + Send + Sync>,
    stale_time: Duration,
}

struct StaleTime;

impl Expiry<QueryKey, Entry> for StaleTime {
    fn expire_after_create(
        &self,
        _key: &QueryKey,
        value: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.stale_time)
    }
}

/// Shared cache for idle reads.
#[derive(Clone)]
pub struct QueryCache {
    entries: Cache<QueryKey, Entry>,
    stale_time: Duration,
    retry: RetryPolicy,
}

impl fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryCache")
            .field("entries", &self.entries.entry_count())
            .field("stale_time", &self.stale_time)
            .field("retry", &self.retry)
            .finish()
    }
}

impl QueryCache {
    #[must_use]
    pub fn new(config: &CacheConfig) -> Self {
        Self::with_retry(config, RetryPolicy::with_retries(config.retry_count))
    }

    #[must_use]
    pub fn with_retry(config: &CacheConfig, retry: RetryPolicy) -> Self {
        let entries = Cache::builder()
            .max_capacity(config.max_entries)
            .expire_after(StaleTime)
            .support_invalidation_closures()
            .build();
        Self {
            entries,
            stale_time: config.stale_time(),
            retry,
        }
    }

    /// Read `key`, fetching with the default stale time on a miss.
    ///
    /// # Errors
    ///
    /// Returns the fetch's [`ApiError`] once retries are exhausted.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, fetch: F) -> Result<T, ApiError>
    where
        T: Clone + Send + Sync + 'static,
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        self.fetch_with(key, self.stale_time, fetch).await
    }

    /// Read `key`, fetching on a miss and keeping the result for `stale_time`.
    ///
    /// Concurrent callers for the same missing key share a single fetch.
    /// Failed fetches are not cached.
    ///
    /// # Errors
    ///
    /// Returns the fetch's [`ApiError`] once retries are exhausted.
    pub async fn fetch_with<T, F, Fut>(
        &self,
        key: QueryKey,
        stale_time: Duration,
        fetch: F,
    ) -> Result<T, ApiError>
    where
        T: Clone + Send + Sync + 'static,
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let retry = &self.retry;
        let init = async {
            tracing::debug!(%key, "cache miss; fetching");
            let value = with_retry(retry, &fetch).await?;
            Ok::<_, ApiError>(Entry {
                value: Arc::new(value),
                stale_time,
            })
        };

        let entry = self
            .entries
            .try_get_with(key.clone(), init)
            .await
            .map_err(|error| (*error).clone())?;

        entry
            .value
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| ApiError::unknown(format!("cache entry {key} holds a different type")))
    }

    /// Cached value for `key`, without fetching.
    pub async fn peek<T>(&self, key: &QueryKey) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        self.entries
            .get(key)
            .await
            .and_then(|entry| entry.value.downcast_ref::<T>().cloned())
    }

    /// Drop every entry whose key starts with `prefix`.
    pub fn invalidate(&self, prefix: &QueryKey) {
        tracing::debug!(%prefix, "invalidating queries");
        let prefix = prefix.clone();
        if let Err(error) = self
            .entries
            .invalidate_entries_if(move |key, _| key.starts_with(&prefix))
        {
            tracing::warn!(%error, "prefix invalidation unavailable; clearing cache");
            self.entries.invalidate_all();
        }
    }

    pub fn clear(&self) {
        self.entries.invalidate_all();
    }
}
