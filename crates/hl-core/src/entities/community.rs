use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::entities::de;
use crate::enums::{
    CommunityCategory, CommunityRole, CommunityStatus, JoinPolicy, MembershipStatus,
};

/// A community as returned by `/api/communities/*`, before normalization.
///
/// Admin-only fields (`inviteCode`, `pendingCount`) are absent for regular
/// members. The admin flag has shipped under both `admin` and `isAdmin`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPayload {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub invite_code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<CommunityCategory>,
    #[serde(default)]
    pub status: Option<CommunityStatus>,
    #[serde(default)]
    pub join_policy: Option<JoinPolicy>,
    #[serde(default)]
    pub member_count: Option<u64>,
    #[serde(default)]
    pub pending_count: Option<u64>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub admin: Option<bool>,
    #[serde(default)]
    pub is_admin: Option<bool>,
    #[serde(default)]
    pub membership_status: Option<MembershipStatus>,
    #[serde(default)]
    pub admins: Option<Vec<String>>,
}

impl CommunityPayload {
    /// Fill backend defaults and collapse the aliased fields.
    #[must_use]
    pub fn normalize(self) -> Community {
        let code = self
            .invite_code
            .clone()
            .filter(|c| !c.is_empty())
            .or_else(|| self.code.clone().filter(|c| !c.is_empty()))
            .unwrap_or_default();

        Community {
            id: self.id,
            name: self.name,
            code,
            invite_code: self.invite_code.filter(|c| !c.is_empty()),
            description: self.description,
            category: self.category,
            status: self.status.unwrap_or_default(),
            join_policy: self.join_policy.unwrap_or_default(),
            member_count: self.member_count.unwrap_or(0),
            pending_count: self.pending_count.unwrap_or(0),
            created_at: self.created_at,
            is_admin: self.admin.or(self.is_admin).unwrap_or(false),
            membership_status: self.membership_status.unwrap_or_default(),
            admins: self.admins.unwrap_or_default(),
        }
    }
}

/// A community from the caller's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    pub id: String,
    pub name: String,
    /// Shareable join code; empty when the caller cannot see it.
    pub code: String,
    pub invite_code: Option<String>,
    pub description: Option<String>,
    pub category: Option<CommunityCategory>,
    pub status: CommunityStatus,
    pub join_policy: JoinPolicy,
    pub member_count: u64,
    pub pending_count: u64,
    pub created_at: Option<NaiveDateTime>,
    pub is_admin: bool,
    pub membership_status: MembershipStatus,
    pub admins: Vec<String>,
}

impl Community {
    #[must_use]
    pub const fn role(&self) -> CommunityRole {
        if self.is_admin {
            CommunityRole::Admin
        } else {
            CommunityRole::Member
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.membership_status == MembershipStatus::Pending
    }
}

impl From<CommunityPayload> for Community {
    fn from(payload: CommunityPayload) -> Self {
        payload.normalize()
    }
}

/// An approved member of a community.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityMember {
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: CommunityRole,
    #[serde(default)]
    pub joined_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
}

/// A pending request to join an approval-required community.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub membership_id: i64,
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
    #[serde(default = "pending")]
    pub status: MembershipStatus,
    #[serde(default)]
    pub requested_at: Option<NaiveDateTime>,
}

const fn pending() -> MembershipStatus {
    MembershipStatus::Pending
}
