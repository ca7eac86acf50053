//! Auth and verification payloads exchanged with `/api/v1/auth` and `/api/v1/users`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::entities::{AdminIdentity, de};
use crate::enums::VerificationStatus;

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub agree_to_terms: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub user_id: i64,
    pub email: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /api/v1/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user_id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub profile_completed: bool,
    #[serde(default)]
    pub profile_completion_percentage: u8,
    #[serde(default)]
    pub current_step: Option<String>,
    #[serde(default)]
    pub pending_steps: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub joined_community_ids: Vec<i64>,
    #[serde(default)]
    pub created_community_ids: Vec<i64>,
}

/// `POST /api/v1/admin/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    pub token: String,
    #[serde(flatten)]
    pub admin: AdminIdentity,
}

/// Wizard progress returned by both profile update and document upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub profile_completion_percentage: u8,
    #[serde(default)]
    pub current_step: Option<String>,
    #[serde(default)]
    pub pending_steps: Vec<String>,
}

/// Identity block of `GET /api/v1/user/profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUser {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: Option<VerificationStatus>,
}

/// `GET /api/v1/user/profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    #[serde(default)]
    pub user: Option<ProfileUser>,
    #[serde(default)]
    pub profile_completion_percentage: u8,
    #[serde(default)]
    pub current_step: Option<String>,
    #[serde(default)]
    pub pending_steps: Vec<String>,
}

/// `GET /api/v1/users/verification-status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationStatusResponse {
    pub status: VerificationStatus,
    #[serde(default)]
    pub profile_completion_percentage: Option<u8>,
    #[serde(default)]
    pub status_message: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub verified_at: Option<NaiveDateTime>,
}
