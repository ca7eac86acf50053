use serde::{Deserialize, Serialize};

use crate::entities::Community;
use crate::enums::{ProfileStep, Role, VerificationStatus};
use crate::responses::{LoginResponse, ProfileResponse};

/// The signed-in user's denormalized profile, as held by the client session.
///
/// Every field is a copy of something the server reported. The client never
/// decides verification state on its own; it only mirrors responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub verification_status: VerificationStatus,
    #[serde(default)]
    pub is_verified: bool,
    /// 0-100, as reported by the backend.
    #[serde(default)]
    pub profile_completion: u8,
    /// Raw `currentStep` string; kept verbatim so unknown values survive.
    #[serde(default)]
    pub current_step: Option<String>,
    #[serde(default)]
    pub pending_steps: Vec<String>,
    #[serde(default)]
    pub has_submitted_documents: bool,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub communities: Vec<Community>,
    #[serde(default)]
    pub has_communities: bool,
}

impl User {
    /// Parsed `current_step`, if it names a known step.
    #[must_use]
    pub fn step(&self) -> Option<ProfileStep> {
        self.current_step.as_deref().and_then(|s| s.parse().ok())
    }
}

/// `(is_verified, has_submitted_documents)` as implied by server-reported state.
fn progress_flags(status: VerificationStatus, step: Option<ProfileStep>) -> (bool, bool) {
    (
        status == VerificationStatus::Verified || step == Some(ProfileStep::Complete),
        matches!(step, Some(ProfileStep::Review | ProfileStep::Complete)),
    )
}

impl From<&LoginResponse> for User {
    fn from(login: &LoginResponse) -> Self {
        let status = login
            .status
            .as_deref()
            .and_then(|s| s.parse::<VerificationStatus>().ok())
            .unwrap_or_default();
        let step = login
            .current_step
            .as_deref()
            .and_then(|s| s.parse::<ProfileStep>().ok());
        let (is_verified, has_submitted_documents) = progress_flags(status, step);

        Self {
            id: login.user_id.to_string(),
            name: login.name.clone(),
            email: login.email.clone(),
            role: login.role.as_deref().and_then(|r| r.parse().ok()).unwrap_or_default(),
            verification_status: status,
            is_verified,
            profile_completion: login.profile_completion_percentage.min(100),
            current_step: login.current_step.clone(),
            pending_steps: login.pending_steps.clone(),
            has_submitted_documents,
            rejection_reason: login.rejection_reason.clone(),
            communities: Vec::new(),
            has_communities: !login.joined_community_ids.is_empty()
                || !login.created_community_ids.is_empty(),
        }
    }
}

impl From<&ProfileResponse> for User {
    fn from(profile: &ProfileResponse) -> Self {
        let identity = profile.user.as_ref();
        let status = identity.and_then(|u| u.status).unwrap_or_default();
        let step = profile
            .current_step
            .as_deref()
            .and_then(|s| s.parse::<ProfileStep>().ok());
        let (is_verified, has_submitted_documents) = progress_flags(status, step);

        Self {
            id: identity.map(|u| u.id.clone()).unwrap_or_default(),
            name: identity.map(|u| u.name.clone()).unwrap_or_default(),
            email: identity.map(|u| u.email.clone()).unwrap_or_default(),
            role: identity
                .and_then(|u| u.role.as_deref())
                .and_then(|r| r.parse().ok())
                .unwrap_or_default(),
            verification_status: status,
            is_verified,
            profile_completion: profile.profile_completion_percentage.min(100),
            current_step: profile.current_step.clone(),
            pending_steps: profile.pending_steps.clone(),
            has_submitted_documents,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn login(json: &str) -> LoginResponse {
        serde_json::from_str(json).expect("login response should parse")
    }

    #[test]
    fn verified_login_builds_verified_user() {
        let response = login(
            r#"{
                "token": "jwt",
                "userId": 11,
                "name": "Sarah",
                "email": "sarah@example.com",
                "role": "USER",
                "profileCompleted": true,
                "profileCompletionPercentage": 100,
                "currentStep": "COMPLETE",
                "pendingSteps": [],
                "status": "VERIFIED",
                "joinedCommunityIds": [4]
            }"#,
        );
        let user = User::from(&response);
        assert_eq!(user.id, "11");
        assert!(user.is_verified);
        assert!(user.has_submitted_documents);
        assert!(user.has_communities);
        assert_eq!(user.step(), Some(ProfileStep::Complete));
    }

    #[test]
    fn fresh_login_is_not_verified() {
        let response = login(
            r#"{
                "token": "jwt",
                "userId": 12,
                "name": "Mike",
                "email": "mike@example.com",
                "profileCompletionPercentage": 25,
                "currentStep": "PROFILE",
                "pendingSteps": ["PROFILE", "DOCUMENT_VERIFICATION"]
            }"#,
        );
        let user = User::from(&response);
        assert!(!user.is_verified);
        assert!(!user.has_submitted_documents);
        assert!(!user.has_communities);
        assert_eq!(user.verification_status, VerificationStatus::NotVerified);
        assert_eq!(user.pending_steps.len(), 2);
    }

    #[test]
    fn profile_response_builds_user() {
        let profile: ProfileResponse = serde_json::from_str(
            r#"{
                "user": {"id": 5, "name": "Nina", "email": "nina@example.com", "status": "NOT_VERIFIED"},
                "profileCompletionPercentage": 75,
                "currentStep": "REVIEW",
                "pendingSteps": ["REVIEW"]
            }"#,
        )
        .unwrap();
        let user = User::from(&profile);
        assert_eq!(user.id, "5");
        assert!(!user.is_verified);
        assert!(user.has_submitted_documents);
        assert_eq!(user.profile_completion, 75);
    }

    #[test]
    fn unknown_step_is_kept_but_not_parsed() {
        let user = User {
            current_step: Some("ONBOARDING".into()),
            ..Default::default()
        };
        assert_eq!(user.step(), None);
        assert_eq!(user.current_step.as_deref(), Some("ONBOARDING"));
    }
}
