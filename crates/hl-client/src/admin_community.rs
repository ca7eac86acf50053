//! Super-admin community lifecycle (`/api/v1/admin/communities`).

use hl_auth::TokenKind;
use hl_core::entities::{AdminCommunityDetail, AdminCommunitySummary, CommunityMember};
use hl_core::enums::CommunityStatus;
use hl_core::pagination::{Page, PageRequest};
use reqwest::Method;
use serde::Serialize;

use crate::http::query_string;
use crate::{ApiClient, ApiError};

const ADMIN: Option<TokenKind> = Some(TokenKind::Admin);

/// Paging and filters for the admin community list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityFilter {
    pub page: u32,
    pub size: u32,
    pub status: Option<CommunityStatus>,
    pub search: Option<String>,
}

impl Default for CommunityFilter {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            status: None,
            search: None,
        }
    }
}

#[derive(Serialize)]
struct StatusBody {
    status: CommunityStatus,
}

impl ApiClient {
    /// `GET /api/v1/admin/communities`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the admin token is missing/rejected or the page cannot be parsed.
    pub async fn admin_communities(
        &self,
        filter: &CommunityFilter,
    ) -> Result<Page<AdminCommunitySummary>, ApiError> {
        let path = format!(
            "/api/v1/admin/communities{}",
            query_string(&[
                ("page", Some(filter.page.to_string())),
                ("size", Some(filter.size.to_string())),
                ("status", filter.status.map(|s| s.as_str().to_string())),
                (
                    "search",
                    filter.search.clone().filter(|s| !s.trim().is_empty()),
                ),
            ])
        );
        self.get_json(&path, ADMIN).await
    }

    /// `GET /api/v1/admin/communities/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the community does not exist.
    pub async fn admin_community(&self, id: i64) -> Result<AdminCommunityDetail, ApiError> {
        self.get_json(&format!("/api/v1/admin/communities/{id}"), ADMIN)
            .await
    }

    /// `PATCH /api/v1/admin/communities/{id}/status`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the community does not exist.
    pub async fn set_admin_community_status(
        &self,
        id: i64,
        status: CommunityStatus,
    ) -> Result<AdminCommunitySummary, ApiError> {
        self.send_json(
            Method::PATCH,
            &format!("/api/v1/admin/communities/{id}/status"),
            &StatusBody { status },
            ADMIN,
        )
        .await
    }

    /// `DELETE /api/v1/admin/communities/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the community does not exist.
    pub async fn delete_admin_community(&self, id: i64) -> Result<(), ApiError> {
        self.send_empty(
            Method::DELETE,
            &format!("/api/v1/admin/communities/{id}"),
            ADMIN,
        )
        .await
    }

    /// `GET /api/v1/admin/communities/{id}/members?page&size`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the community does not exist.
    pub async fn admin_community_members(
        &self,
        id: i64,
        page: PageRequest,
    ) -> Result<Page<CommunityMember>, ApiError> {
        let path = format!(
            "/api/v1/admin/communities/{id}/members{}",
            query_string(&[
                ("page", Some(page.page.to_string())),
                ("size", Some(page.size.to_string())),
            ])
        );
        self.get_json(&path, ADMIN).await
    }
}
