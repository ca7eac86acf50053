//! Cached reads.

use std::time::Duration;

use hl_core::entities::{Community, CommunityMember, JoinRequest};
use hl_core::enums::VerificationStatus;
use hl_core::pagination::{Page, PageRequest};
use hl_core::responses::{ProfileResponse, VerificationStatusResponse};

use crate::membership::{Partition, Reconciliation};
use crate::notify::Notification;
use crate::{QueryKey, SyncContext, SyncError};

impl SyncContext {
    /// The caller's communities, always refetched (in-flight reads coalesce).
    ///
    /// On success the session's community list is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Api`] once the single retry is exhausted.
    pub async fn my_communities(&self) -> Result<Vec<Community>, SyncError> {
        let client = self.client.clone();
        let communities = self
            .cache
            .fetch_with(QueryKey::my_communities(), Duration::ZERO, || {
                let client = client.clone();
                async move { client.my_communities().await }
            })
            .await?;
        self.session.set_communities(communities.clone());
        Ok(communities)
    }

    /// Fetch the caller's communities and report resolved join requests.
    ///
    /// Calls are serialized. A failed fetch leaves the previous pending
    /// snapshot untouched, so nothing is missed or double-reported. After a
    /// sign-in or sign-out the first fetch is a fresh baseline.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Api`] if the fetch fails.
    pub async fn refresh_memberships(&self) -> Result<Reconciliation, SyncError> {
        let mut tracker = self.tracker.lock().await;
        let session = self.current_session();
        let communities = self.my_communities().await?;
        if self.current_session() != session {
            tracing::debug!("session changed during membership fetch; not reconciling");
            return Ok(Reconciliation {
                partition: Partition::of(&communities),
                transitions: Vec::new(),
            });
        }
        tracker.follow_session(session);
        let reconciliation = tracker.reconcile(&communities);
        for transition in &reconciliation.transitions {
            self.notifier.emit(Notification::from(transition));
        }
        Ok(reconciliation)
    }

    /// # Errors
    ///
    /// Returns [`SyncError::Api`] if the community cannot be fetched.
    pub async fn community(&self, id: &str) -> Result<Community, SyncError> {
        let client = self.client.clone();
        Ok(self
            .cache
            .fetch(QueryKey::community(id), || {
                let client = client.clone();
                let id = id.to_string();
                async move { client.community(&id).await }
            })
            .await?)
    }

    /// # Errors
    ///
    /// Returns [`SyncError::Api`] if the page cannot be fetched.
    pub async fn members(
        &self,
        id: &str,
        page: PageRequest,
    ) -> Result<Page<CommunityMember>, SyncError> {
        let client = self.client.clone();
        Ok(self
            .cache
            .fetch(QueryKey::members(id, page.page, page.size), || {
                let client = client.clone();
                let id = id.to_string();
                async move { client.community_members(&id, page).await }
            })
            .await?)
    }

    /// # Errors
    ///
    /// Returns [`SyncError::Api`] if the caller is not an admin of the community.
    pub async fn join_requests(&self, id: &str) -> Result<Vec<JoinRequest>, SyncError> {
        let client = self.client.clone();
        Ok(self
            .cache
            .fetch(QueryKey::join_requests(id), || {
                let client = client.clone();
                let id = id.to_string();
                async move { client.join_requests(&id).await }
            })
            .await?)
    }

    /// # Errors
    ///
    /// Returns [`SyncError::Api`] if the profile cannot be fetched.
    pub async fn profile(&self) -> Result<ProfileResponse, SyncError> {
        let client = self.client.clone();
        Ok(self
            .cache
            .fetch(QueryKey::profile(), || {
                let client = client.clone();
                async move { client.profile().await }
            })
            .await?)
    }

    /// Current review state. A `VERIFIED` answer is mirrored into the session.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Api`] if the status cannot be fetched.
    pub async fn verification_status(&self) -> Result<VerificationStatusResponse, SyncError> {
        let client = self.client.clone();
        let status = self
            .cache
            .fetch(QueryKey::verification_status(), || {
                let client = client.clone();
                async move { client.verification_status().await }
            })
            .await?;
        if status.status == VerificationStatus::Verified {
            self.session.mark_verified();
        } else if let Some(percentage) = status.profile_completion_percentage {
            self.session.update_profile_completion(percentage);
        }
        Ok(status)
    }
}
