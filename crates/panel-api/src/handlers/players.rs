//! Player handlers
//!
//! Search, profiles, online status and per-player moderation.

use axum::{
    extract::{Query, State},
    Json,
};
use panel_core::{PlayerStatus, SteamIdentifier};
use panel_service::{
    BanResponse, BanService, CharacterResponse, CreateWarningRequest, IssueBanRequest,
    PageResponse, PlayerDetailResponse, PlayerResponse, PlayerService, SearchQuery,
    StatusQuery, StatusService, WarningResponse, WarningService,
};

use crate::extractors::{Pagination, StaffUser, ValidPath, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Search players by name or steam identifier
///
/// GET /players?query=&page=
pub async fn search_players(
    State(state): State<AppState>,
    _staff: StaffUser,
    Query(search): Query<SearchQuery>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PageResponse<PlayerResponse>>> {
    let service = PlayerService::new(state.service_context());
    let response = service.search(search.query.as_deref(), page).await?;
    Ok(Json(response))
}

/// Player profile, real or masked
///
/// GET /players/{steam}
pub async fn get_player(
    State(state): State<AppState>,
    _staff: StaffUser,
    ValidPath(steam): ValidPath<String>,
) -> ApiResult<Json<PlayerDetailResponse>> {
    let service = PlayerService::new(state.service_context());
    let response = service.profile(&steam).await?;
    Ok(Json(response))
}

/// Where the player is connected
///
/// GET /players/{steam}/status?fresh=
pub async fn get_player_status(
    State(state): State<AppState>,
    _staff: StaffUser,
    ValidPath(steam): ValidPath<String>,
    Query(query): Query<StatusQuery>,
) -> ApiResult<Json<PlayerStatus>> {
    let steam = SteamIdentifier::parse(&steam)
        .map_err(|e| ApiError::invalid_path(e.to_string()))?;

    let service = StatusService::new(state.service_context());
    let status = service.online_status(steam.as_str(), !query.fresh, false).await;
    Ok(Json(status))
}

/// Characters of a player
///
/// GET /players/{steam}/characters
pub async fn get_player_characters(
    State(state): State<AppState>,
    _staff: StaffUser,
    ValidPath(steam): ValidPath<String>,
) -> ApiResult<Json<Vec<CharacterResponse>>> {
    let service = PlayerService::new(state.service_context());
    let characters = service.characters(&steam).await?;
    Ok(Json(characters))
}

/// Bans on any of the player's identifiers
///
/// GET /players/{steam}/bans
pub async fn get_player_bans(
    State(state): State<AppState>,
    _staff: StaffUser,
    ValidPath(steam): ValidPath<String>,
) -> ApiResult<Json<Vec<BanResponse>>> {
    let service = BanService::new(state.service_context());
    let bans = service.for_player(&steam).await?;
    Ok(Json(bans))
}

/// Ban a player
///
/// POST /players/{steam}/bans
pub async fn issue_ban(
    State(state): State<AppState>,
    StaffUser(staff): StaffUser,
    ValidPath(steam): ValidPath<String>,
    ValidatedJson(request): ValidatedJson<IssueBanRequest>,
) -> ApiResult<Created<Json<Vec<BanResponse>>>> {
    let service = BanService::new(state.service_context());
    let bans = service.issue(&staff, &steam, request).await?;
    Ok(Created(Json(bans)))
}

/// Warnings and notes on a player
///
/// GET /players/{steam}/warnings
pub async fn get_player_warnings(
    State(state): State<AppState>,
    _staff: StaffUser,
    ValidPath(steam): ValidPath<String>,
) -> ApiResult<Json<Vec<WarningResponse>>> {
    let service = WarningService::new(state.service_context());
    let warnings = service.list(&steam).await?;
    Ok(Json(warnings))
}

/// Add a warning or note
///
/// POST /players/{steam}/warnings
pub async fn create_warning(
    State(state): State<AppState>,
    StaffUser(staff): StaffUser,
    ValidPath(steam): ValidPath<String>,
    ValidatedJson(request): ValidatedJson<CreateWarningRequest>,
) -> ApiResult<Created<Json<WarningResponse>>> {
    let service = WarningService::new(state.service_context());
    let warning = service.create(&staff, &steam, request).await?;
    Ok(Created(Json(warning)))
}
