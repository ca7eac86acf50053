//! # hl-sync
//!
//! Client-side state on top of [`hl_client`]:
//!
//! - [`cache`]: single-flight query cache with per-query stale times
//! - [`session`]: the signed-in user's denormalized profile
//! - [`membership`]: admin / member / pending partition and transition detection
//! - [`verification`]: wizard-step routing from server-reported progress
//! - [`notify`]: transient user-facing notifications
//! - [`poller`]: periodic membership refresh
//!
//! [`SyncContext`] ties them together; queries, account flows and community
//! mutations are `impl SyncContext` blocks in their own modules.

pub mod account;
pub mod cache;
pub mod membership;
pub mod mutations;
pub mod notify;
pub mod poller;
pub mod queries;
pub mod retry;
pub mod session;
pub mod verification;

mod error;

pub use cache::{QueryCache, QueryKey};
pub use error::SyncError;
pub use membership::{MembershipTracker, Partition, Reconciliation, Transition};
pub use notify::{Level, Notification, Notifier};
pub use poller::PollerHandle;
pub use retry::RetryPolicy;
pub use session::Session;
pub use verification::{VerificationRoute, route_for, route_for_progress, route_for_user};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use hl_auth::TokenStore;
use hl_client::{ApiClient, ApiError};
use hl_config::HlConfig;
use tokio::sync::Mutex;

/// Everything a front end needs to talk to the backend and keep local state.
///
/// Cheap to clone; clones share cache, session, notifier and tracker.
#[derive(Debug, Clone)]
pub struct SyncContext {
    client: ApiClient,
    cache: QueryCache,
    session: Session,
    notifier: Notifier,
    tracker: Arc<Mutex<MembershipTracker>>,
    session_epoch: Arc<AtomicU64>,
}

impl SyncContext {
    #[must_use]
    pub fn new(client: ApiClient, cache: QueryCache) -> Self {
        Self {
            client,
            cache,
            session: Session::new(),
            notifier: Notifier::new(),
            tracker: Arc::new(Mutex::new(MembershipTracker::new())),
            session_epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Build the API client and cache from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP client cannot be built.
    pub fn from_config(config: &HlConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let client = ApiClient::new(&config.api, tokens)?;
        Ok(Self::new(client, QueryCache::new(&config.cache)))
    }

    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    #[must_use]
    pub const fn cache(&self) -> &QueryCache {
        &self.cache
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Start the background membership poller on a clone of this context.
    #[must_use]
    pub fn watch_memberships(&self, period: std::time::Duration) -> PollerHandle {
        poller::spawn(self.clone(), period)
    }

    /// Mark a sign-in or sign-out; membership tracking restarts from a new baseline.
    fn begin_session(&self) {
        self.session_epoch.fetch_add(1, Ordering::SeqCst);
    }

    fn current_session(&self) -> u64 {
        self.session_epoch.load(Ordering::SeqCst)
    }

    /// Emit an error notification for a failed action and pass the error on.
    fn report_failure<E: Into<SyncError>>(&self, title: &str, error: E) -> SyncError {
        let error = error.into();
        tracing::warn!(%error, "{title}");
        self.notifier
            .emit(Notification::error(title, Some(error.user_message())));
        error
    }
}
