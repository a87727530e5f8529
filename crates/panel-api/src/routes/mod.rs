//! Route definitions
//!
//! API routes are mounted under /api/v1; health routes are kept separate so
//! they bypass rate limiting.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{
    auth, bans, characters, health, logs, panel_logs, players, servers, warnings,
};
use crate::state::AppState;

/// API router without health routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Liveness and readiness probes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(player_routes())
        .merge(character_routes())
        .merge(moderation_routes())
        .merge(log_routes())
        .merge(server_routes())
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/me", get(auth::get_current_staff))
}

fn player_routes() -> Router<AppState> {
    Router::new()
        .route("/players", get(players::search_players))
        .route("/players/:steam", get(players::get_player))
        .route("/players/:steam/status", get(players::get_player_status))
        .route("/players/:steam/characters", get(players::get_player_characters))
        .route(
            "/players/:steam/bans",
            get(players::get_player_bans).post(players::issue_ban),
        )
        .route(
            "/players/:steam/warnings",
            get(players::get_player_warnings).post(players::create_warning),
        )
}

fn character_routes() -> Router<AppState> {
    Router::new()
        .route("/characters", get(characters::search_characters))
        .route("/characters/:id", get(characters::get_character))
}

fn moderation_routes() -> Router<AppState> {
    Router::new()
        .route("/bans", get(bans::list_bans))
        .route("/bans/:hash", delete(bans::lift_ban))
        .route("/warnings/:id", delete(warnings::delete_warning))
}

fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/logs", get(logs::list_logs))
        .route("/panel-logs", get(panel_logs::list_panel_logs))
}

fn server_routes() -> Router<AppState> {
    Router::new().route("/servers/players", get(servers::get_online_players))
}
