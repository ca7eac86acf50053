//! Community mutations.
//!
//! Mutations are never retried. On success each one updates the session,
//! invalidates every `communities` query and emits a notification; on failure
//! it emits an error notification and returns the error unchanged.

use hl_client::{CommunityUpdate, NewCommunity};
use hl_core::entities::Community;
use hl_core::enums::{CommunityStatus, JoinPolicy};
use hl_core::validation;

use crate::notify::Notification;
use crate::{QueryKey, SyncContext, SyncError};

impl SyncContext {
    /// Join by invite code. The code is trimmed and upper-cased first.
    ///
    /// Approval-required communities come back pending; the caller is told
    /// the request was sent rather than that they joined.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Invalid`] for a malformed code, or
    /// [`SyncError::Api`] if the backend rejects the join.
    pub async fn join(&self, code: &str) -> Result<Community, SyncError> {
        const FAILED: &str = "Failed to join community";

        let code = validation::validate_join_code(code).map_err(|e| self.report_failure(FAILED, e))?;
        let community = self
            .client
            .join_community(&code)
            .await
            .map_err(|e| self.report_failure(FAILED, e))?;

        self.session.add_community(community.clone());
        self.invalidate_communities();
        let notification = if community.is_pending() {
            Notification::info(
                "Request sent",
                Some(format!(
                    "Your request to join {} is awaiting approval.",
                    community.name
                )),
            )
        } else {
            Notification::success(
                format!("Joined {}!", community.name),
                Some("You can now access this community".to_string()),
            )
        };
        self.notifier.emit(notification);
        tracing::info!(community_id = %community.id, pending = community.is_pending(), "joined community");
        Ok(community)
    }

    /// Create a community. The creator becomes its admin.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Invalid`] for malformed input, or
    /// [`SyncError::Api`] if the backend rejects the community.
    pub async fn create(&self, community: &NewCommunity) -> Result<Community, SyncError> {
        const FAILED: &str = "Failed to create community";

        validation::validate_community(&community.name, &community.description)
            .map_err(|e| self.report_failure(FAILED, e))?;
        let body = NewCommunity {
            name: community.name.trim().to_string(),
            description: community.description.trim().to_string(),
            ..community.clone()
        };
        let created = self
            .client
            .create_community(&body)
            .await
            .map_err(|e| self.report_failure(FAILED, e))?;

        self.session.add_community(created.clone());
        self.invalidate_communities();
        self.notifier.emit(Notification::success(
            "Community created",
            Some(format!("Share the code {} to invite neighbours.", created.code))
                .filter(|_| !created.code.is_empty()),
        ));
        tracing::info!(community_id = %created.id, "created community");
        Ok(created)
    }

    /// # Errors
    ///
    /// Returns [`SyncError::Api`] if the backend refuses, for instance when
    /// the caller is the last admin.
    pub async fn leave(&self, id: &str) -> Result<(), SyncError> {
        self.client
            .leave_community(id)
            .await
            .map_err(|e| self.report_failure("Failed to leave community", e))?;

        self.session.remove_community(id);
        if self.tracker.lock().await.forget(id) {
            tracing::debug!(community_id = id, "withdrew pending join request");
        }
        self.invalidate_communities();
        self.notifier.emit(Notification::success(
            "Left community",
            Some("You have left the community.".to_string()),
        ));
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`SyncError::Api`] if the caller is not an admin of `id`.
    pub async fn approve(&self, id: &str, membership_id: i64) -> Result<(), SyncError> {
        self.client
            .approve_join_request(id, membership_id)
            .await
            .map_err(|e| self.report_failure("Failed to approve request", e))?;
        self.invalidate_communities();
        self.notifier
            .emit(Notification::success("Request approved", None));
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`SyncError::Api`] if the caller is not an admin of `id`.
    pub async fn reject(&self, id: &str, membership_id: i64) -> Result<(), SyncError> {
        self.client
            .reject_join_request(id, membership_id)
            .await
            .map_err(|e| self.report_failure("Failed to reject request", e))?;
        self.invalidate_communities();
        self.notifier.emit(Notification::info("Request rejected", None));
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`SyncError::Api`] if the caller is not an admin of `id`.
    pub async fn remove_member(&self, id: &str, membership_id: i64) -> Result<(), SyncError> {
        self.client
            .remove_member(id, membership_id)
            .await
            .map_err(|e| self.report_failure("Failed to remove member", e))?;
        self.invalidate_communities();
        self.notifier.emit(Notification::success("Member removed", None));
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`SyncError::Invalid`] for malformed input, or
    /// [`SyncError::Api`] if the caller is not an admin of `id`.
    pub async fn update_details(
        &self,
        id: &str,
        update: &CommunityUpdate,
    ) -> Result<Community, SyncError> {
        const FAILED: &str = "Failed to update community";

        validation::validate_community(&update.name, &update.description)
            .map_err(|e| self.report_failure(FAILED, e))?;
        let updated = self
            .client
            .update_community(id, update)
            .await
            .map_err(|e| self.report_failure(FAILED, e))?;
        self.after_admin_update(&updated, "Community updated");
        Ok(updated)
    }

    /// # Errors
    ///
    /// Returns [`SyncError::Api`] if the caller is not an admin of `id`.
    pub async fn update_join_policy(
        &self,
        id: &str,
        join_policy: JoinPolicy,
    ) -> Result<Community, SyncError> {
        let updated = self
            .client
            .update_join_policy(id, join_policy)
            .await
            .map_err(|e| self.report_failure("Failed to update join policy", e))?;
        self.after_admin_update(&updated, "Join policy updated");
        Ok(updated)
    }

    /// # Errors
    ///
    /// Returns [`SyncError::Api`] if the caller is not an admin of `id`.
    pub async fn update_status(
        &self,
        id: &str,
        status: CommunityStatus,
    ) -> Result<Community, SyncError> {
        let updated = self
            .client
            .update_community_status(id, status)
            .await
            .map_err(|e| self.report_failure("Failed to update status", e))?;
        self.after_admin_update(&updated, "Status updated");
        Ok(updated)
    }

    fn after_admin_update(&self, updated: &Community, title: &str) {
        self.session.update(|user| {
            if let Some(existing) = user.communities.iter_mut().find(|c| c.id == updated.id) {
                *existing = updated.clone();
            }
        });
        self.invalidate_communities();
        self.notifier.emit(Notification::success(title, None));
    }

    fn invalidate_communities(&self) {
        self.cache.invalidate(&QueryKey::communities());
    }
}
