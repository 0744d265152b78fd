//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT,
//!   STORAGE_BUCKET, STORAGE_REGION
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer, TestUser,
};
use reqwest::StatusCode;

async fn create_pick(server: &TestServer, owner: &TestUser) -> PickResponse {
    let response = server
        .post_auth("/api/v1/picks", &owner.token, &CreatePickRequest::unique())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_comment(
    server: &TestServer,
    author: &TestUser,
    pick_id: i64,
    body: &str,
) -> CommentResponse {
    let response = server
        .post_auth(
            "/api/v1/comments",
            &author.token,
            &CreateCommentRequest::on(pick_id, body),
        )
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn react(server: &TestServer, user: &TestUser, path: &str, req: ReactRequest) -> ToggleResponse {
    let response = server.post_auth(path, &user.token, &req).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Pick Tests
// ============================================================================

#[tokio::test]
async fn test_create_pick_normalises_image() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let owner = server.create_user("Ana", false).await.unwrap();

    let pick = create_pick(&server, &owner).await;

    assert_eq!(pick.owner.id, owner.id.into_inner());
    assert_eq!(pick.owner.name, "Ana");
    assert!(pick.image_url.starts_with("https://"));
    assert!(pick.image_url.ends_with(".png"));
    assert_eq!(
        (pick.total_likes, pick.total_dislikes, pick.total_comments),
        (0, 0, 0)
    );
}

#[tokio::test]
async fn test_create_pick_requires_image() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let owner = server.create_user("Ana", false).await.unwrap();
    let request = CreatePickRequest {
        title: Some("no image".into()),
        image_ref: None,
        link: None,
    };

    let response = server
        .post_auth("/api/v1/picks", &owner.token, &request)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "MISSING_IMAGE");
}

#[tokio::test]
async fn test_create_pick_without_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/api/v1/picks", &CreatePickRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_list_picks_newest_first() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let owner = server.create_user("Ana", false).await.unwrap();
    let first = create_pick(&server, &owner).await;
    let second = create_pick(&server, &owner).await;

    let response = server.get("/api/v1/picks?limit=100").await.unwrap();
    let picks: Vec<PickResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let pos = |id: i64| picks.iter().position(|p| p.id == id).unwrap();
    assert!(pos(second.id) < pos(first.id));
    assert!(picks.iter().all(|p| p.caller_reaction.is_none()));
}

#[tokio::test]
async fn test_update_pick_owner_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let owner = server.create_user("Ana", false).await.unwrap();
    let other = server.create_user("Bia", false).await.unwrap();
    let pick = create_pick(&server, &owner).await;
    let path = format!("/api/v1/picks/{}", pick.id);
    let body = serde_json::json!({ "title": "Home win", "link": null });

    let response = server.patch_auth(&path, &other.token, &body).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.patch_auth(&path, &owner.token, &body).await.unwrap();
    let updated: PickResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title.as_deref(), Some("Home win"));
    assert_eq!(updated.link, None);
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_reaction_scenario() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let a = server.create_user("A", false).await.unwrap();
    let b = server.create_user("B", false).await.unwrap();
    let pick = create_pick(&server, &a).await;
    let path = format!("/api/v1/picks/{}/react", pick.id);

    let r = react(&server, &a, &path, ReactRequest::like()).await;
    assert_eq!((r.action.as_str(), r.total_likes, r.total_dislikes), ("added", 1, 0));

    let r = react(&server, &a, &path, ReactRequest::dislike()).await;
    assert_eq!((r.action.as_str(), r.total_likes, r.total_dislikes), ("changed", 0, 1));

    let r = react(&server, &a, &path, ReactRequest::dislike()).await;
    assert_eq!((r.action.as_str(), r.total_likes, r.total_dislikes), ("removed", 0, 0));

    let r = react(&server, &b, &path, ReactRequest::like()).await;
    assert_eq!((r.action.as_str(), r.total_likes, r.total_dislikes), ("added", 1, 0));

    // The stats read agrees with the toggle result
    let response = server
        .get_auth(&format!("/api/v1/picks/{}/stats", pick.id), &b.token)
        .await
        .unwrap();
    let stats: PickResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!((stats.total_likes, stats.total_dislikes), (1, 0));
    assert_eq!(stats.caller_reaction.as_deref(), Some("like"));
}

#[tokio::test]
async fn test_react_invalid_polarity() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let a = server.create_user("A", false).await.unwrap();
    let pick = create_pick(&server, &a).await;

    let response = server
        .post_auth(
            &format!("/api/v1/picks/{}/react", pick.id),
            &a.token,
            &ReactRequest {
                polarity: "love".into(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_react_missing_target() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let a = server.create_user("A", false).await.unwrap();

    let response = server
        .post_auth("/api/v1/comments/999999999/react", &a.token, &ReactRequest::like())
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_concurrent_same_user_toggles() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let a = server.create_user("A", false).await.unwrap();
    let pick = create_pick(&server, &a).await;
    let path = format!("/api/v1/picks/{}/react", pick.id);

    let like = ReactRequest::like();
    let calls = (0..4).map(|_| server.post_auth(&path, &a.token, &like));
    for response in futures::future::join_all(calls).await {
        assert_status(response.unwrap(), StatusCode::OK).await.unwrap();
    }

    // An even number of same-polarity toggles ends with no reaction
    let rows = server.reaction_rows("pick", pick.id).await.unwrap();
    assert_eq!(rows, 0);
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_thread() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let a = server.create_user("Ana", false).await.unwrap();
    let b = server.create_user("Bia", false).await.unwrap();
    let pick = create_pick(&server, &a).await;

    let first = create_comment(&server, &b, pick.id, "first").await;
    let second = create_comment(&server, &a, pick.id, "second").await;
    react(
        &server,
        &a,
        &format!("/api/v1/comments/{}/react", first.id),
        ReactRequest::like(),
    )
    .await;

    let response = server
        .get_auth(&format!("/api/v1/picks/{}", pick.id), &a.token)
        .await
        .unwrap();
    let detail: PickDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(detail.pick.total_comments, 2);
    let ids: Vec<i64> = detail.comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, [first.id, second.id]);
    assert_eq!(detail.comments[0].author.name, "Bia");
    assert_eq!(detail.comments[0].total_likes, 1);
    assert_eq!(detail.comments[0].caller_reaction.as_deref(), Some("like"));
    assert!(detail.comments.iter().all(|c| c.pick_id == pick.id));
}

#[tokio::test]
async fn test_comment_body_boundaries() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let a = server.create_user("A", false).await.unwrap();
    let pick = create_pick(&server, &a).await;

    for (body, expected) in [
        ("x".to_string(), StatusCode::CREATED),
        ("x".repeat(1000), StatusCode::CREATED),
        ("x".repeat(1001), StatusCode::BAD_REQUEST),
        (String::new(), StatusCode::BAD_REQUEST),
    ] {
        let response = server
            .post_auth(
                "/api/v1/comments",
                &a.token,
                &CreateCommentRequest::on(pick.id, body),
            )
            .await
            .unwrap();
        assert_status(response, expected).await.unwrap();
    }
}

#[tokio::test]
async fn test_comment_on_missing_pick() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let a = server.create_user("A", false).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/comments",
            &a.token,
            &CreateCommentRequest::on(999_999_999, "hello"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_forbidden_comment_delete() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let owner = server.create_user("Ana", false).await.unwrap();
    let stranger = server.create_user("Bia", false).await.unwrap();
    let admin = server.create_user("Root", true).await.unwrap();
    let pick = create_pick(&server, &owner).await;
    let comment = create_comment(&server, &owner, pick.id, "mine").await;
    react(
        &server,
        &stranger,
        &format!("/api/v1/comments/{}/react", comment.id),
        ReactRequest::dislike(),
    )
    .await;
    let path = format!("/api/v1/comments/{}", comment.id);

    let response = server.delete_auth(&path, &stranger.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(server.reaction_rows("comment", comment.id).await.unwrap(), 1);

    let response = server.delete_auth(&path, &admin.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    assert_eq!(server.reaction_rows("comment", comment.id).await.unwrap(), 0);
}

// ============================================================================
// Cascade Tests
// ============================================================================

#[tokio::test]
async fn test_delete_pick_cascades() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let owner = server.create_user("Ana", false).await.unwrap();
    let other = server.create_user("Bia", false).await.unwrap();
    let pick = create_pick(&server, &owner).await;

    react(
        &server,
        &other,
        &format!("/api/v1/picks/{}/react", pick.id),
        ReactRequest::like(),
    )
    .await;
    let mut comment_ids = Vec::new();
    for body in ["a", "b", "c"] {
        let comment = create_comment(&server, &other, pick.id, body).await;
        react(
            &server,
            &owner,
            &format!("/api/v1/comments/{}/react", comment.id),
            ReactRequest::like(),
        )
        .await;
        comment_ids.push(comment.id);
    }

    let path = format!("/api/v1/picks/{}", pick.id);
    let response = server.delete_auth(&path, &other.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &owner.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    assert_eq!(server.reaction_rows("pick", pick.id).await.unwrap(), 0);
    for id in comment_ids {
        assert_eq!(server.reaction_rows("comment", id).await.unwrap(), 0);
        let response = server.get(&format!("/api/v1/comments/{id}")).await.unwrap();
        assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    }

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
