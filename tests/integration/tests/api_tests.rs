//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

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
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.full_name, request.full_name);
    // Full name splits on the first space
    assert_eq!(auth.user.first_name, "Test");
    assert!(auth.user.last_name.starts_with("Voter"));
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_requires_terms() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.terms_accepted = false;

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "TERMS_NOT_ACCEPTED");
}

#[tokio::test]
async fn test_register_password_mismatch() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password_confirmation = "SomethingElse123!".to_string();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "PASSWORD_MISMATCH");
}

#[tokio::test]
async fn test_register_weak_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "weakpassword".to_string();
    request.password_confirmation = "weakpassword".to_string();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "WEAK_PASSWORD");
}

#[tokio::test]
async fn test_register_rejects_invalid_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.email = "not-an-email".to_string();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/v1/auth/register", &request).await.unwrap();

    // Second registration with same email
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(err.error.code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register_req).await.unwrap();

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.email, register_req.email);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "WrongPass123!".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register_req).await.unwrap();

    let login_req = LoginRequest {
        email: register_req.email.clone(),
        password: "NotTheRightOne1!".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register
    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Refresh
    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token,
    };
    let response = server.post("/api/v1/auth/refresh", &refresh_req).await.unwrap();
    let tokens: TokenPairResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!tokens.access_token.is_empty());
    assert!(!tokens.refresh_token.is_empty());
}

#[tokio::test]
async fn test_refresh_rejects_garbage_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let refresh_req = RefreshTokenRequest {
        refresh_token: "not-a-real-token".to_string(),
    };

    let response = server.post("/api/v1/auth/refresh", &refresh_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Poll Tests
// ============================================================================

#[tokio::test]
async fn test_create_poll() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register
    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Create poll
    let poll_req = CreatePollRequest::unique();
    let response = server
        .post_auth("/api/v1/polls", &auth.access_token, &poll_req)
        .await
        .unwrap();
    let poll: PollResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(poll.question, poll_req.question);
    assert_eq!(poll.created_by, Some(auth.user.id));
    assert_eq!(poll.choices.len(), 3);
    assert!(poll.is_active);
    assert!(!poll.is_expired);
    assert!(!poll.allow_multiple);
    assert_eq!(poll.total_votes, 0);
    assert_eq!(poll.days_remaining, None);
    assert!(poll.choices.iter().all(|c| c.votes == 0));
}

#[tokio::test]
async fn test_create_poll_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let poll_req = CreatePollRequest::unique();

    let response = server.post("/api/v1/polls", &poll_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_create_poll_with_expiry() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let mut poll_req = CreatePollRequest::unique();
    poll_req.expires_at =
        Some(chrono::Utc::now() + chrono::Duration::days(3) + chrono::Duration::hours(1));

    let response = server
        .post_auth("/api/v1/polls", &auth.access_token, &poll_req)
        .await
        .unwrap();
    let poll: PollResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(!poll.is_expired);
    assert!(poll.expires_at.is_some());
    assert_eq!(poll.days_remaining, Some(3));
}

#[tokio::test]
async fn test_create_poll_rejects_single_choice() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let poll_req = CreatePollRequest::with_choices(vec!["Only option"]);
    let response = server
        .post_auth("/api/v1/polls", &auth.access_token, &poll_req)
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "NOT_ENOUGH_CHOICES");
}

#[tokio::test]
async fn test_create_poll_rejects_blank_question() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let mut poll_req = CreatePollRequest::unique();
    poll_req.question = "   ".to_string();

    let response = server
        .post_auth("/api/v1/polls", &auth.access_token, &poll_req)
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "QUESTION_REQUIRED");
}

#[tokio::test]
async fn test_create_poll_skips_blank_choices() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let poll_req = CreatePollRequest::with_choices(vec!["Yes", "   ", "No"]);
    let response = server
        .post_auth("/api/v1/polls", &auth.access_token, &poll_req)
        .await
        .unwrap();
    let poll: PollResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(poll.choices.len(), 2);
    assert_eq!(poll.choices[0].text, "Yes");
    assert_eq!(poll.choices[1].text, "No");
}

#[tokio::test]
async fn test_list_polls_newest_first() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let first_req = CreatePollRequest::unique();
    let response = server
        .post_auth("/api/v1/polls", &auth.access_token, &first_req)
        .await
        .unwrap();
    let first: PollResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let second_req = CreatePollRequest::unique();
    let response = server
        .post_auth("/api/v1/polls", &auth.access_token, &second_req)
        .await
        .unwrap();
    let second: PollResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get("/api/v1/polls").await.unwrap();
    let polls: Vec<PollResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    // Other tests share the database, so only check relative order
    let first_pos = polls.iter().position(|p| p.id == first.id);
    let second_pos = polls.iter().position(|p| p.id == second.id);
    assert!(first_pos.is_some());
    assert!(second_pos.is_some());
    assert!(second_pos < first_pos, "newer poll should come first");
}

#[tokio::test]
async fn test_get_poll_detail() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let poll_req = CreatePollRequest::unique();
    let response = server
        .post_auth("/api/v1/polls", &auth.access_token, &poll_req)
        .await
        .unwrap();
    let created: PollResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/polls/{}", created.id), &auth.access_token)
        .await
        .unwrap();
    let poll: PollDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(poll.id, created.id);
    assert_eq!(poll.question, poll_req.question);
    assert_eq!(poll.choices.len(), 3);
    assert!(!poll.has_voted);
}

#[tokio::test]
async fn test_get_poll_detail_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/polls/123456789").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_get_poll_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/v1/polls/999999999999999999", &auth.access_token)
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_POLL");
}

#[tokio::test]
async fn test_get_poll_rejects_malformed_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/v1/polls/not-a-number", &auth.access_token)
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_deactivate_poll() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let poll_req = CreatePollRequest::unique();
    let response = server
        .post_auth("/api/v1/polls", &auth.access_token, &poll_req)
        .await
        .unwrap();
    let poll: PollResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Deactivate
    let response = server
        .delete_auth(&format!("/api/v1/polls/{}", poll.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Verify closed
    let response = server
        .get_auth(&format!("/api/v1/polls/{}", poll.id), &auth.access_token)
        .await
        .unwrap();
    let detail: PollDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!detail.is_active);
}

#[tokio::test]
async fn test_deactivate_poll_requires_ownership() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Owner creates a poll
    let owner_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &owner_req).await.unwrap();
    let owner: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let poll_req = CreatePollRequest::unique();
    let response = server
        .post_auth("/api/v1/polls", &owner.access_token, &poll_req)
        .await
        .unwrap();
    let poll: PollResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // A different user tries to close it
    let other_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &other_req).await.unwrap();
    let other: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/polls/{}", poll.id), &other.access_token)
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(err.error.code, "NOT_POLL_OWNER");
}

// ============================================================================
// Vote Tests
// ============================================================================

#[tokio::test]
async fn test_cast_vote() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let poll_req = CreatePollRequest::unique();
    let response = server
        .post_auth("/api/v1/polls", &auth.access_token, &poll_req)
        .await
        .unwrap();
    let poll: PollResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Vote for the first choice
    let vote_req = CastVoteRequest::single(&poll.choices[0].id);
    let response = server
        .post_auth(
            &format!("/api/v1/polls/{}/votes", poll.id),
            &auth.access_token,
            &vote_req,
        )
        .await
        .unwrap();
    let vote: VoteResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(vote.poll_id, poll.id);
    assert_eq!(vote.choice_ids, vec![poll.choices[0].id.clone()]);

    // The poll now shows the vote
    let response = server
        .get_auth(&format!("/api/v1/polls/{}", poll.id), &auth.access_token)
        .await
        .unwrap();
    let detail: PollDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(detail.has_voted);
    assert_eq!(detail.total_votes, 1);
    assert_eq!(detail.choices[0].votes, 1);
}

#[tokio::test]
async fn test_cast_vote_twice_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let poll_req = CreatePollRequest::unique();
    let response = server
        .post_auth("/api/v1/polls", &auth.access_token, &poll_req)
        .await
        .unwrap();
    let poll: PollResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let vote_req = CastVoteRequest::single(&poll.choices[0].id);
    server
        .post_auth(
            &format!("/api/v1/polls/{}/votes", poll.id),
            &auth.access_token,
            &vote_req,
        )
        .await
        .unwrap();

    // Second ballot from the same user
    let vote_req = CastVoteRequest::single(&poll.choices[1].id);
    let response = server
        .post_auth(
            &format!("/api/v1/polls/{}/votes", poll.id),
            &auth.access_token,
            &vote_req,
        )
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(err.error.code, "ALREADY_VOTED");
}

#[tokio::test]
async fn test_cast_vote_expired_poll() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let poll_req = CreatePollRequest::expired();
    let response = server
        .post_auth("/api/v1/polls", &auth.access_token, &poll_req)
        .await
        .unwrap();
    let poll: PollResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(poll.is_expired);

    let vote_req = CastVoteRequest::single(&poll.choices[0].id);
    let response = server
        .post_auth(
            &format!("/api/v1/polls/{}/votes", poll.id),
            &auth.access_token,
            &vote_req,
        )
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::GONE).await.unwrap();
    assert_eq!(err.error.code, "POLL_EXPIRED");
}

#[tokio::test]
async fn test_cast_vote_requires_selection() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let poll_req = CreatePollRequest::unique();
    let response = server
        .post_auth("/api/v1/polls", &auth.access_token, &poll_req)
        .await
        .unwrap();
    let poll: PollResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let vote_req = CastVoteRequest { choices: vec![] };
    let response = server
        .post_auth(
            &format!("/api/v1/polls/{}/votes", poll.id),
            &auth.access_token,
            &vote_req,
        )
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "NO_CHOICE_SELECTED");
}

#[tokio::test]
async fn test_cast_vote_single_choice_poll_rejects_multiple() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let poll_req = CreatePollRequest::unique();
    let response = server
        .post_auth("/api/v1/polls", &auth.access_token, &poll_req)
        .await
        .unwrap();
    let poll: PollResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let vote_req = CastVoteRequest::multiple(&[&poll.choices[0].id, &poll.choices[1].id]);
    let response = server
        .post_auth(
            &format!("/api/v1/polls/{}/votes", poll.id),
            &auth.access_token,
            &vote_req,
        )
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "MULTIPLE_CHOICES_NOT_ALLOWED");
}

#[tokio::test]
async fn test_cast_vote_multiple_when_allowed() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let poll_req = CreatePollRequest::multi_choice();
    let response = server
        .post_auth("/api/v1/polls", &auth.access_token, &poll_req)
        .await
        .unwrap();
    let poll: PollResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let vote_req = CastVoteRequest::multiple(&[&poll.choices[0].id, &poll.choices[2].id]);
    let response = server
        .post_auth(
            &format!("/api/v1/polls/{}/votes", poll.id),
            &auth.access_token,
            &vote_req,
        )
        .await
        .unwrap();
    let vote: VoteResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(vote.choice_ids.len(), 2);

    // Each selection bumps its own counter
    let response = server
        .get_auth(&format!("/api/v1/polls/{}", poll.id), &auth.access_token)
        .await
        .unwrap();
    let detail: PollDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.total_votes, 2);
    assert_eq!(detail.choices[0].votes, 1);
    assert_eq!(detail.choices[1].votes, 0);
    assert_eq!(detail.choices[2].votes, 1);
}

#[tokio::test]
async fn test_cast_vote_closed_poll_still_counts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let poll_req = CreatePollRequest::unique();
    let response = server
        .post_auth("/api/v1/polls", &auth.access_token, &poll_req)
        .await
        .unwrap();
    let poll: PollResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Close the poll
    let response = server
        .delete_auth(&format!("/api/v1/polls/{}", poll.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Deactivation hides a poll from listings but does not block voting
    let vote_req = CastVoteRequest::single(&poll.choices[0].id);
    let response = server
        .post_auth(
            &format!("/api/v1/polls/{}/votes", poll.id),
            &auth.access_token,
            &vote_req,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_cast_vote_unknown_poll() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let vote_req = CastVoteRequest::single("123456789");
    let response = server
        .post_auth(
            "/api/v1/polls/999999999999999999/votes",
            &auth.access_token,
            &vote_req,
        )
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_POLL");
}

// ============================================================================
// Results Tests
// ============================================================================

#[tokio::test]
async fn test_results_reflect_votes() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Owner creates the poll
    let owner_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &owner_req).await.unwrap();
    let owner: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let poll_req = CreatePollRequest::unique();
    let response = server
        .post_auth("/api/v1/polls", &owner.access_token, &poll_req)
        .await
        .unwrap();
    let poll: PollResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Three voters: two pick the first choice, one picks the second
    let mut tokens = Vec::new();
    for _ in 0..3 {
        let voter_req = RegisterRequest::unique();
        let response = server.post("/api/v1/auth/register", &voter_req).await.unwrap();
        let voter: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
        tokens.push(voter.access_token);
    }

    for (i, token) in tokens.iter().enumerate() {
        let choice_id = if i < 2 {
            &poll.choices[0].id
        } else {
            &poll.choices[1].id
        };
        let vote_req = CastVoteRequest::single(choice_id);
        let response = server
            .post_auth(&format!("/api/v1/polls/{}/votes", poll.id), token, &vote_req)
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    // Results are public; no token needed
    let response = server
        .get(&format!("/api/v1/polls/{}/results", poll.id))
        .await
        .unwrap();
    let results: ResultsResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(results.poll_id, poll.id);
    assert_eq!(results.total_votes, 3);
    assert_eq!(results.choices[0].votes, 2);
    assert_eq!(results.choices[1].votes, 1);
    assert_eq!(results.choices[2].votes, 0);
    assert!((results.choices[0].percentage - 66.7).abs() < f64::EPSILON);
    assert!((results.choices[1].percentage - 33.3).abs() < f64::EPSILON);
    assert_eq!(results.choices[0].percentage_int, 67);
    assert_eq!(results.choices[1].percentage_int, 33);
    assert_eq!(results.leading_choice_id, Some(poll.choices[0].id.clone()));
}

#[tokio::test]
async fn test_results_zero_votes() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let poll_req = CreatePollRequest::unique();
    let response = server
        .post_auth("/api/v1/polls", &auth.access_token, &poll_req)
        .await
        .unwrap();
    let poll: PollResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/v1/polls/{}/results", poll.id))
        .await
        .unwrap();
    let results: ResultsResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(results.total_votes, 0);
    for choice in &results.choices {
        assert_eq!(choice.votes, 0);
        assert!((choice.percentage - 0.0).abs() < f64::EPSILON);
        assert_eq!(choice.percentage_int, 0);
    }
    // With all counters tied at zero the earliest choice leads
    assert_eq!(results.leading_choice_id, Some(poll.choices[0].id.clone()));
}

#[tokio::test]
async fn test_results_unknown_poll() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get("/api/v1/polls/999999999999999999/results")
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_POLL");
}
