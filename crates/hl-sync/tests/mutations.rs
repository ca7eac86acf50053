//! Community mutations and the membership poller against a mock backend.

use std::sync::Arc;
use std::time::Duration;

use hl_auth::{MemoryTokenStore, TokenKind};
use hl_client::{ApiClient, ErrorCategory, NewCommunity};
use hl_config::{ApiConfig, CacheConfig};
use hl_core::entities::User;
use hl_core::enums::{CommunityCategory, JoinPolicy};
use hl_sync::{Level, QueryCache, RetryPolicy, SyncContext, SyncError, poller};
use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn context(server: &MockServer, verified: bool) -> SyncContext {
    let config = ApiConfig {
        base_url: server.base_url(),
        ..ApiConfig::default()
    };
    let tokens = Arc::new(MemoryTokenStore::with_token(TokenKind::User, "user-jwt"));
    let client = ApiClient::new(&config, tokens).unwrap();
    let ctx = SyncContext::new(
        client,
        QueryCache::with_retry(&CacheConfig::default(), RetryPolicy::immediate(1)),
    );
    ctx.session().login(User {
        id: "4".into(),
        name: "Sarah".into(),
        is_verified: verified,
        ..User::default()
    });
    ctx
}

#[tokio::test]
async fn join_normalizes_code_and_adds_community() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/communities/join")
            .json_body(json!({"code": "GRN-8821"}));
        then.status(200)
            .json_body(json!({"id": 1, "name": "Green Valley", "membershipStatus": "APPROVED"}));
    });
    let ctx = context(&server, true);
    let mut rx = ctx.notifier().subscribe();

    let community = ctx.join("  grn-8821 ").await.unwrap();

    mock.assert();
    assert_eq!(community.name, "Green Valley");
    let user = ctx.session().current().unwrap();
    assert_eq!(user.communities, vec![community]);
    assert!(user.has_communities);

    let notification = rx.try_recv().unwrap();
    assert_eq!(notification.level, Level::Success);
    assert_eq!(notification.title, "Joined Green Valley!");
}

#[tokio::test]
async fn failed_join_is_not_retried_and_leaves_session_alone() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/communities/join");
        then.status(400)
            .json_body(json!({"message": "Invalid community code"}));
    });
    let ctx = context(&server, true);
    let mut rx = ctx.notifier().subscribe();

    let err = ctx.join("ZZZ-0000").await.unwrap_err();

    mock.assert_calls(1);
    match err {
        SyncError::Api(api) => assert_eq!(api.category, ErrorCategory::Validation),
        other => panic!("expected an API error, got {other:?}"),
    }
    assert!(ctx.session().current().unwrap().communities.is_empty());

    let notification = rx.try_recv().unwrap();
    assert_eq!(notification.level, Level::Error);
    assert_eq!(notification.title, "Failed to join community");
    assert_eq!(
        notification.description.as_deref(),
        Some("Invalid community code")
    );
}

#[tokio::test]
async fn malformed_code_fails_before_the_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/communities/join");
        then.status(200);
    });
    let ctx = context(&server, true);

    assert!(matches!(
        ctx.join("green valley").await,
        Err(SyncError::Invalid(_))
    ));
    mock.assert_calls(0);
}

#[tokio::test]
async fn create_trims_input_and_makes_caller_admin() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/communities").json_body(json!({
            "name": "Maple Street",
            "description": "Borrow and lend on Maple",
            "category": "NEIGHBOURHOOD",
            "joinPolicy": "APPROVAL_REQUIRED"
        }));
        then.status(201).json_body(json!({
            "id": 12,
            "name": "Maple Street",
            "inviteCode": "MPL-4421",
            "isAdmin": true
        }));
    });
    let ctx = context(&server, true);

    let created = ctx
        .create(&NewCommunity {
            name: " Maple Street ".into(),
            description: "Borrow and lend on Maple ".into(),
            category: CommunityCategory::Neighbourhood,
            join_policy: JoinPolicy::ApprovalRequired,
        })
        .await
        .unwrap();

    assert!(created.is_admin);
    assert_eq!(created.code, "MPL-4421");
    assert!(ctx.session().current().unwrap().has_communities);
}

#[tokio::test]
async fn leave_removes_community_and_invalidates_reads() {
    let server = MockServer::start();
    let detail = server.mock(|when, then| {
        when.method(GET).path("/api/communities/7");
        then.status(200).json_body(json!({"id": 7, "name": "Oak Court"}));
    });
    let leave = server.mock(|when, then| {
        when.method(DELETE).path("/api/communities/7/members/me");
        then.status(204);
    });
    let ctx = context(&server, true);

    let community = ctx.community("7").await.unwrap();
    ctx.session().add_community(community);
    ctx.community("7").await.unwrap();
    detail.assert_calls(1);

    ctx.leave("7").await.unwrap();
    leave.assert();
    assert!(!ctx.session().current().unwrap().has_communities);

    ctx.community("7").await.unwrap();
    detail.assert_calls(2);
}

#[tokio::test]
async fn approving_a_request_refreshes_the_request_list() {
    let server = MockServer::start();
    let requests = server.mock(|when, then| {
        when.method(GET).path("/api/communities/3/join-requests");
        then.status(200).json_body(json!([
            {"membershipId": 41, "userId": 9, "name": "Lisa Park"}
        ]));
    });
    let approve = server.mock(|when, then| {
        when.method(POST)
            .path("/api/communities/3/join-requests/41/approve");
        then.status(200);
    });
    let ctx = context(&server, true);

    assert_eq!(ctx.join_requests("3").await.unwrap().len(), 1);
    ctx.approve("3", 41).await.unwrap();
    approve.assert();
    ctx.join_requests("3").await.unwrap();
    requests.assert_calls(2);
}

#[tokio::test]
async fn forbidden_admin_action_reports_and_keeps_token() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(PATCH).path("/api/communities/3/join-policy");
        then.status(403);
    });
    let ctx = context(&server, true);
    let mut rx = ctx.notifier().subscribe();

    let err = ctx
        .update_join_policy("3", JoinPolicy::Open)
        .await
        .unwrap_err();

    assert!(matches!(err, SyncError::Api(ref api) if api.status == 403));
    assert_eq!(
        ctx.client().tokens().load(TokenKind::User).as_deref(),
        Some("user-jwt")
    );
    assert_eq!(rx.try_recv().unwrap().level, Level::Error);
}

#[tokio::test]
async fn poll_once_skips_unverified_users() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/communities/me");
        then.status(200).json_body(json!([]));
    });
    let ctx = context(&server, false);

    assert!(poller::poll_once(&ctx).await.is_none());
    mock.assert_calls(0);
}

#[tokio::test]
async fn poller_reports_resolved_requests_until_stopped() {
    let server = MockServer::start();
    let mut pending = server.mock(|when, then| {
        when.method(GET).path("/api/communities/me");
        then.status(200).json_body(json!([
            {"id": 3, "name": "Tech Hub", "membershipStatus": "PENDING"}
        ]));
    });
    let ctx = context(&server, true);
    let mut rx = ctx.notifier().subscribe();

    // Baseline fetch so the poller has a pending snapshot to compare against.
    ctx.refresh_memberships().await.unwrap();
    pending.delete();
    server.mock(|when, then| {
        when.method(GET).path("/api/communities/me");
        then.status(200).json_body(json!([
            {"id": 3, "name": "Tech Hub", "membershipStatus": "APPROVED"}
        ]));
    });

    let handle = ctx.watch_memberships(Duration::from_millis(20));
    let notification = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("poller should report the approval")
        .unwrap();
    handle.stop().await;

    assert_eq!(notification.title, "Request approved!");
    assert_eq!(
        notification.description.as_deref(),
        Some("You've been accepted into Tech Hub.")
    );
}

#[tokio::test]
async fn zero_period_poller_still_polls() {
    let server = MockServer::start();
    let mut pending = server.mock(|when, then| {
        when.method(GET).path("/api/communities/me");
        then.status(200).json_body(json!([
            {"id": 3, "name": "Tech Hub", "membershipStatus": "PENDING"}
        ]));
    });
    let ctx = context(&server, true);
    let mut rx = ctx.notifier().subscribe();

    ctx.refresh_memberships().await.unwrap();
    pending.delete();
    server.mock(|when, then| {
        when.method(GET).path("/api/communities/me");
        then.status(200).json_body(json!([]));
    });

    let handle = ctx.watch_memberships(Duration::ZERO);
    let notification = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("poller should report the decline")
        .unwrap();
    handle.stop().await;

    assert_eq!(notification.title, "Request declined");
}
