//! Super-admin console views.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::entities::CommunityMember;
use crate::enums::{CommunityCategory, CommunityStatus, ProfileStep, Role, VerificationStatus};

/// The signed-in super admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminIdentity {
    pub id: i64,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// One row of the paginated user list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub community: Option<String>,
    #[serde(default)]
    pub community_id: Option<i64>,
    #[serde(default)]
    pub status: VerificationStatus,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub current_step: Option<ProfileStep>,
    #[serde(default)]
    pub profile_completion_percentage: Option<u8>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Full user record for the verification review screen, with document links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetail {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub status: VerificationStatus,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub about_me: Option<String>,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
    #[serde(default)]
    pub government_id_url: Option<String>,
    #[serde(default)]
    pub address_proof_url: Option<String>,
    #[serde(default)]
    pub profile_completion_percentage: Option<u8>,
    #[serde(default)]
    pub current_step: Option<ProfileStep>,
    #[serde(default)]
    pub community_id: Option<i64>,
    #[serde(default)]
    pub community: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl UserDetail {
    /// Whether the user has reached the admin review stage.
    #[must_use]
    pub fn awaiting_review(&self) -> bool {
        self.status == VerificationStatus::NotVerified
            && self.current_step == Some(ProfileStep::Review)
    }
}

/// Approve/reject payload for `POST /api/v1/admin/users/{id}/verify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationDecision {
    pub approved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl VerificationDecision {
    #[must_use]
    pub const fn approve() -> Self {
        Self {
            approved: true,
            rejection_reason: None,
        }
    }

    #[must_use]
    pub fn reject(reason: impl Into<String>) -> Self {
        Self {
            approved: false,
            rejection_reason: Some(reason.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub user_id: i64,
    #[serde(default)]
    pub message: Option<String>,
    pub verified: bool,
    #[serde(default)]
    pub current_step: Option<ProfileStep>,
    #[serde(default)]
    pub profile_completion_percentage: Option<u8>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

/// One row of the admin community list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCommunitySummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<CommunityCategory>,
    #[serde(default)]
    pub status: CommunityStatus,
    #[serde(default)]
    pub member_count: u64,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Community detail for the admin console, with the full member list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCommunityDetail {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<CommunityCategory>,
    #[serde(default)]
    pub status: CommunityStatus,
    #[serde(default)]
    pub member_count: u64,
    #[serde(default)]
    pub admins: Vec<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub members: Vec<CommunityMember>,
}
