//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL (JWT_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

async fn server() -> Option<TestServer> {
    if !check_test_env().await {
        return None;
    }
    Some(TestServer::start().await.expect("Failed to start server"))
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let Some(server) = server().await else { return };

    let response = server.get("/health").await.expect("Request failed");
    assert!(response.headers().contains_key("x-request-id"));
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let Some(server) = server().await else { return };

    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_me_returns_staff() {
    let Some(server) = server().await else { return };
    let staff = SeededPlayer::insert_staff(&server.pool, false).await.unwrap();
    let tokens = staff.tokens(&server.config).unwrap();

    let response = server
        .get_auth("/api/v1/auth/me", &tokens.access_token)
        .await
        .unwrap();
    let me: StaffResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(me.id, staff.user_id);
    assert_eq!(me.steam_identifier, staff.steam_identifier);
    assert_eq!(me.player_name, staff.player_name);
    assert!(!me.avatar.is_empty());
}

#[tokio::test]
async fn test_non_staff_is_forbidden() {
    let Some(server) = server().await else { return };
    let player = SeededPlayer::insert(&server.pool, "Civilian").await.unwrap();
    let tokens = player.tokens(&server.config).unwrap();

    let response = server
        .get_auth("/api/v1/auth/me", &tokens.access_token)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "NOT_STAFF");
}

#[tokio::test]
async fn test_missing_token() {
    let Some(server) = server().await else { return };

    let response = server.get("/api/v1/players").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    let Some(server) = server().await else { return };
    let staff = SeededPlayer::insert_staff(&server.pool, false).await.unwrap();
    let tokens = staff.tokens(&server.config).unwrap();

    let request = RefreshTokenRequest {
        refresh_token: tokens.refresh_token,
    };
    let response = server.post("/api/v1/auth/refresh", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
    assert_eq!(auth.staff.steam_identifier, staff.steam_identifier);
}

// ============================================================================
// Player Tests
// ============================================================================

#[tokio::test]
async fn test_search_players_exact_steam() {
    let Some(server) = server().await else { return };
    let staff = SeededPlayer::insert_staff(&server.pool, false).await.unwrap();
    let target = SeededPlayer::insert(&server.pool, "Searchable").await.unwrap();
    let tokens = staff.tokens(&server.config).unwrap();

    let path = format!("/api/v1/players?query={}", target.steam_identifier);
    let response = server.get_auth(&path, &tokens.access_token).await.unwrap();
    let page: Page<PlayerResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.page, 1);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, target.user_id);
    assert_eq!(page.data[0].player_name, target.player_name);
    assert!(page.next_page.is_none());
}

#[tokio::test]
async fn test_player_profile() {
    let Some(server) = server().await else { return };
    let staff = SeededPlayer::insert_staff(&server.pool, false).await.unwrap();
    let target = SeededPlayer::insert(&server.pool, "Profiled").await.unwrap();
    let tokens = staff.tokens(&server.config).unwrap();

    let path = format!("/api/v1/players/{}", target.steam_identifier);
    let response = server.get_auth(&path, &tokens.access_token).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["player"]["steamIdentifier"], target.steam_identifier.as_str());
    assert_eq!(body["player"]["isBanned"], false);
}

#[tokio::test]
async fn test_unknown_player() {
    let Some(server) = server().await else { return };
    let staff = SeededPlayer::insert_staff(&server.pool, false).await.unwrap();
    let tokens = staff.tokens(&server.config).unwrap();

    let path = format!("/api/v1/players/{}", unique_steam_identifier());
    let response = server.get_auth(&path, &tokens.access_token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Warning Tests
// ============================================================================

#[tokio::test]
async fn test_warning_lifecycle() {
    let Some(server) = server().await else { return };
    let issuer = SeededPlayer::insert_staff(&server.pool, false).await.unwrap();
    let other = SeededPlayer::insert_staff(&server.pool, false).await.unwrap();
    let target = SeededPlayer::insert(&server.pool, "Warned").await.unwrap();
    let issuer_tokens = issuer.tokens(&server.config).unwrap();
    let other_tokens = other.tokens(&server.config).unwrap();

    let path = format!("/api/v1/players/{}/warnings", target.steam_identifier);
    let response = server
        .post_auth(&path, &issuer_tokens.access_token, &CreateWarningRequest::warning("Fail RP"))
        .await
        .unwrap();
    let warning: WarningResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(warning.player_id, target.user_id);
    assert_eq!(warning.issuer_id, issuer.user_id);
    assert_eq!(warning.warning_type, "warning");

    let response = server
        .post_auth(&path, &issuer_tokens.access_token, &CreateWarningRequest::note("Keep an eye out"))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth(&path, &issuer_tokens.access_token).await.unwrap();
    let warnings: Vec<WarningResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(warnings.len(), 2);

    let delete_path = format!("/api/v1/warnings/{}", warning.id);
    let response = server
        .delete_auth(&delete_path, &other_tokens.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_auth(&delete_path, &issuer_tokens.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .delete_auth(&delete_path, &issuer_tokens.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_blank_warning_rejected() {
    let Some(server) = server().await else { return };
    let issuer = SeededPlayer::insert_staff(&server.pool, false).await.unwrap();
    let target = SeededPlayer::insert(&server.pool, "Warned").await.unwrap();
    let tokens = issuer.tokens(&server.config).unwrap();

    let path = format!("/api/v1/players/{}/warnings", target.steam_identifier);
    let response = server
        .post_auth(&path, &tokens.access_token, &CreateWarningRequest::warning("   "))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Ban Tests
// ============================================================================

#[tokio::test]
async fn test_ban_lifecycle() {
    let Some(server) = server().await else { return };
    let staff = SeededPlayer::insert_staff(&server.pool, true).await.unwrap();
    let target = SeededPlayer::insert(&server.pool, "Banned").await.unwrap();
    let tokens = staff.tokens(&server.config).unwrap();

    let path = format!("/api/v1/players/{}/bans", target.steam_identifier);
    let request = IssueBanRequest {
        reason: Some("  Cheating  ".to_string()),
        expire: None,
    };
    let response = server
        .post_auth(&path, &tokens.access_token, &request)
        .await
        .unwrap();
    let bans: Vec<BanResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();

    // steam and license rows; the ip identifier is never banned
    assert_eq!(bans.len(), 2);
    assert!(bans.iter().all(|ban| !ban.identifier.starts_with("ip:")));
    assert!(bans.iter().all(|ban| ban.is_permanent));
    assert!(bans.iter().all(|ban| ban.reason.as_deref() == Some("Cheating")));
    assert!(bans
        .iter()
        .all(|ban| ban.creator_identifier.as_deref() == Some(staff.steam_identifier.as_str())));
    let hash = bans[0].ban_hash.clone();

    let response = server
        .post_auth(&path, &tokens.access_token, &IssueBanRequest::default())
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server.get_auth(&path, &tokens.access_token).await.unwrap();
    let listed: Vec<BanResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 2);

    let lift_path = format!("/api/v1/bans/{hash}");
    let response = server
        .delete_auth(&lift_path, &tokens.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .delete_auth(&lift_path, &tokens.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let logs_path = format!("/api/v1/panel-logs?identifier={}", target.steam_identifier);
    let response = server.get_auth(&logs_path, &tokens.access_token).await.unwrap();
    let logs: Page<PanelLogResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let actions: Vec<&str> = logs.data.iter().map(|log| log.action.as_str()).collect();
    assert!(actions.contains(&"Issued Ban"));
    assert!(actions.contains(&"Removed Ban"));
    assert!(logs
        .data
        .iter()
        .all(|log| log.source_identifier == staff.steam_identifier
            && log.target_identifier == target.steam_identifier));
}

#[tokio::test]
async fn test_logs_invalid_page_falls_back() {
    let Some(server) = server().await else { return };
    let staff = SeededPlayer::insert_staff(&server.pool, false).await.unwrap();
    let tokens = staff.tokens(&server.config).unwrap();

    let response = server
        .get_auth("/api/v1/logs?page=abc&server=3abc", &tokens.access_token)
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["page"], 1);
    assert_eq!(body["filters"]["server"], "3abc");

    let response = server
        .get_auth("/api/v1/logs?page=4294967295", &tokens.access_token)
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["links"]["next"].is_null());
}

// ============================================================================
// Server Tests
// ============================================================================

#[tokio::test]
async fn test_online_players_without_servers() {
    let Some(server) = server().await else { return };
    if !server.config.servers.addresses.is_empty() {
        return;
    }
    let staff = SeededPlayer::insert_staff(&server.pool, false).await.unwrap();
    let tokens = staff.tokens(&server.config).unwrap();

    let response = server
        .get_auth("/api/v1/servers/players", &tokens.access_token)
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["players"].as_object().is_some());
}
