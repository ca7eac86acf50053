//! Super-admin user verification (`/api/v1/admin/users`).

use hl_auth::TokenKind;
use hl_core::entities::{UserDetail, UserSummary, VerificationDecision, VerificationResult};
use hl_core::enums::{ProfileStep, Role, VerificationStatus};
use hl_core::pagination::Page;
use reqwest::Method;

use crate::http::query_string;
use crate::{ApiClient, ApiError};

const ADMIN: Option<TokenKind> = Some(TokenKind::Admin);

/// Filters and paging for the admin user list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFilter {
    pub page: u32,
    pub size: u32,
    pub sort_by: String,
    pub sort_dir: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
    pub verification_status: Option<VerificationStatus>,
    pub current_step: Option<ProfileStep>,
}

impl Default for UserFilter {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            sort_by: "createdAt".to_string(),
            sort_dir: "desc".to_string(),
            email: None,
            name: None,
            role: None,
            verification_status: None,
            current_step: None,
        }
    }
}

impl UserFilter {
    fn to_query(&self) -> String {
        let non_empty = |s: &Option<String>| s.clone().filter(|v| !v.trim().is_empty());
        query_string(&[
            ("page", Some(self.page.to_string())),
            ("size", Some(self.size.to_string())),
            ("sortBy", Some(self.sort_by.clone())),
            ("sortDir", Some(self.sort_dir.clone())),
            ("email", non_empty(&self.email)),
            ("name", non_empty(&self.name)),
            ("role", self.role.map(|r| r.as_str().to_string())),
            (
                "verificationStatus",
                self.verification_status.map(|s| s.as_str().to_string()),
            ),
            ("currentStep", self.current_step.map(|s| s.as_str().to_string())),
        ])
    }
}

impl ApiClient {
    /// `GET /api/v1/admin/users`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the admin token is missing/rejected or the page cannot be parsed.
    pub async fn list_users(&self, filter: &UserFilter) -> Result<Page<UserSummary>, ApiError> {
        let path = format!("/api/v1/admin/users{}", filter.to_query());
        self.get_json(&path, ADMIN).await
    }

    /// `GET /api/v1/admin/users/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the user does not exist or the admin token is rejected.
    pub async fn user_detail(&self, user_id: i64) -> Result<UserDetail, ApiError> {
        self.get_json(&format!("/api/v1/admin/users/{user_id}"), ADMIN)
            .await
    }

    /// `POST /api/v1/admin/users/{id}/verify`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the decision is rejected by the backend.
    pub async fn verify_user(
        &self,
        user_id: i64,
        decision: &VerificationDecision,
    ) -> Result<VerificationResult, ApiError> {
        self.send_json(
            Method::POST,
            &format!("/api/v1/admin/users/{user_id}/verify"),
            decision,
            ADMIN,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_matches_console_defaults() {
        assert_eq!(
            UserFilter::default().to_query(),
            "?page=0&size=10&sortBy=createdAt&sortDir=desc"
        );
    }

    #[test]
    fn filters_are_appended_and_blank_text_dropped() {
        let filter = UserFilter {
            page: 2,
            email: Some("  ".into()),
            name: Some("Rachel".into()),
            verification_status: Some(VerificationStatus::NotVerified),
            current_step: Some(ProfileStep::Review),
            ..UserFilter::default()
        };
        assert_eq!(
            filter.to_query(),
            "?page=2&size=10&sortBy=createdAt&sortDir=desc&name=Rachel\
             &verificationStatus=NOT_VERIFIED&currentStep=REVIEW"
        );
    }
}
