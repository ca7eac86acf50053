//! Super-admin endpoints against a mock backend.

use std::sync::Arc;

use hl_auth::{MemoryTokenStore, TokenKind, TokenStore};
use hl_client::{ApiClient, CommunityFilter, ErrorCategory, UserFilter};
use hl_config::ApiConfig;
use hl_core::entities::VerificationDecision;
use hl_core::enums::{CommunityStatus, ProfileStep};
use hl_core::responses::LoginRequest;
use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn admin_client(server: &MockServer) -> (ApiClient, Arc<MemoryTokenStore>) {
    let tokens = Arc::new(MemoryTokenStore::new());
    tokens.store(TokenKind::User, "user-jwt").unwrap();
    tokens.store(TokenKind::Admin, "admin-jwt").unwrap();
    let config = ApiConfig {
        base_url: server.base_url(),
        ..ApiConfig::default()
    };
    (ApiClient::new(&config, tokens.clone()).unwrap(), tokens)
}

#[tokio::test]
async fn admin_login_flattens_identity() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/admin/auth/login");
        then.status(200).json_body(json!({
            "token": "new-admin-jwt", "id": 1, "email": "root@example.com", "name": "Root"
        }));
    });

    let (api, _) = admin_client(&server);
    let session = api
        .admin_login(&LoginRequest {
            email: "root@example.com".into(),
            password: "pw".into(),
        })
        .await
        .unwrap();
    assert_eq!(session.token, "new-admin-jwt");
    assert_eq!(session.admin.name, "Root");
}

#[tokio::test]
async fn list_users_uses_admin_token_and_defaults() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/admin/users")
            .header("authorization", "Bearer admin-jwt")
            .query_param("page", "0")
            .query_param("size", "10")
            .query_param("sortBy", "createdAt")
            .query_param("sortDir", "desc")
            .query_param("currentStep", "REVIEW");
        then.status(200).json_body(json!({
            "content": [{
                "id": 7, "name": "Rachel", "email": "rachel@example.com",
                "status": "NOT_VERIFIED", "role": "USER", "currentStep": "REVIEW",
                "profileCompletionPercentage": 75
            }],
            "pageNumber": 0, "pageSize": 10, "totalElements": 1, "totalPages": 1, "last": true
        }));
    });

    let (api, _) = admin_client(&server);
    let page = api
        .list_users(&UserFilter {
            current_step: Some(ProfileStep::Review),
            ..UserFilter::default()
        })
        .await
        .unwrap();
    mock.assert();
    assert_eq!(page.content[0].current_step, Some(ProfileStep::Review));
}

#[tokio::test]
async fn reject_sends_reason() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/admin/users/7/verify")
            .json_body(json!({"approved": false, "rejectionReason": "Expired ID"}));
        then.status(200).json_body(json!({
            "userId": 7, "verified": false, "rejectionReason": "Expired ID"
        }));
    });

    let (api, _) = admin_client(&server);
    let result = api
        .verify_user(7, &VerificationDecision::reject("Expired ID"))
        .await
        .unwrap();
    mock.assert();
    assert!(!result.verified);
}

#[tokio::test]
async fn admin_401_clears_admin_and_user_tokens() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/admin/users/7");
        then.status(401);
    });

    let (api, tokens) = admin_client(&server);
    let err = api.user_detail(7).await.unwrap_err();
    assert_eq!(err.category, ErrorCategory::Unauthorized);
    assert!(tokens.load(TokenKind::Admin).is_none());
    assert!(tokens.load(TokenKind::User).is_none());
}

#[tokio::test]
async fn community_lifecycle() {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/admin/communities")
            .query_param("status", "INACTIVE")
            .query_param("search", "maple");
        then.status(200).json_body(json!({
            "content": [{"id": 3, "name": "Maple", "status": "INACTIVE", "memberCount": 4}],
            "pageNumber": 0, "pageSize": 10, "totalElements": 1, "totalPages": 1, "last": true
        }));
    });
    let status = server.mock(|when, then| {
        when.method(PATCH)
            .path("/api/v1/admin/communities/3/status")
            .json_body(json!({"status": "ACTIVE"}));
        then.status(200)
            .json_body(json!({"id": 3, "name": "Maple", "status": "ACTIVE", "memberCount": 4}));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/admin/communities/3");
        then.status(204);
    });

    let (api, _) = admin_client(&server);
    let page = api
        .admin_communities(&CommunityFilter {
            status: Some(CommunityStatus::Inactive),
            search: Some("maple".into()),
            ..CommunityFilter::default()
        })
        .await
        .unwrap();
    assert_eq!(page.content[0].id, 3);

    let updated = api
        .set_admin_community_status(3, CommunityStatus::Active)
        .await
        .unwrap();
    assert_eq!(updated.status, CommunityStatus::Active);

    api.delete_admin_community(3).await.unwrap();

    list.assert();
    status.assert();
    delete.assert();
}
