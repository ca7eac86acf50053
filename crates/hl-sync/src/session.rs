//! The signed-in user's denormalized profile.
//!
//! Every mutation here mirrors something the server already reported; the
//! session never decides verification state on its own.

use std::sync::{Arc, PoisonError, RwLock};

use hl_core::entities::{Community, User};
use hl_core::enums::{ProfileStep, VerificationStatus};
use hl_core::responses::ProgressResponse;

/// Completion reported after documents are submitted if the backend omits it.
const SUBMITTED_COMPLETION: u8 = 75;

/// Shared handle to the current user. Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Arc<RwLock<Option<User>>>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current user.
    #[must_use]
    pub fn current(&self) -> Option<User> {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn login(&self, user: User) {
        tracing::debug!(user_id = %user.id, "session started");
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = Some(user);
    }

    pub fn logout(&self) {
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Apply `f` to the user, if signed in. Returns whether it ran.
    pub fn update(&self, f: impl FnOnce(&mut User)) -> bool {
        let mut guard = self.user.write().unwrap_or_else(PoisonError::into_inner);
        guard.as_mut().map(f).is_some()
    }

    /// Replace the community list with a fresh fetch.
    pub fn set_communities(&self, communities: Vec<Community>) {
        self.update(|user| {
            user.has_communities = !communities.is_empty();
            user.communities = communities;
        });
    }

    /// Add or replace one community after a join/create.
    pub fn add_community(&self, community: Community) {
        self.update(|user| {
            user.communities.retain(|c| c.id != community.id);
            user.communities.push(community);
            user.has_communities = true;
        });
    }

    pub fn remove_community(&self, id: &str) {
        self.update(|user| {
            user.communities.retain(|c| c.id != id);
            user.has_communities = !user.communities.is_empty();
        });
    }

    pub fn update_profile_completion(&self, percentage: u8) {
        self.update(|user| user.profile_completion = percentage.min(100));
    }

    /// Documents accepted for review.
    pub fn mark_documents_submitted(&self, percentage: Option<u8>) {
        self.update(|user| {
            user.has_submitted_documents = true;
            user.profile_completion = percentage.unwrap_or(SUBMITTED_COMPLETION).min(100);
            user.current_step = Some(ProfileStep::Review.as_str().to_string());
        });
    }

    pub fn mark_verified(&self) {
        self.update(|user| {
            user.is_verified = true;
            user.verification_status = VerificationStatus::Verified;
            user.profile_completion = 100;
            user.current_step = Some(ProfileStep::Complete.as_str().to_string());
        });
    }

    /// Mirror a profile-update or document-upload response.
    pub fn apply_progress(&self, progress: &ProgressResponse) {
        self.update(|user| {
            user.profile_completion = progress.profile_completion_percentage.min(100);
            user.current_step.clone_from(&progress.current_step);
            user.pending_steps.clone_from(&progress.pending_steps);
        });
    }
}
