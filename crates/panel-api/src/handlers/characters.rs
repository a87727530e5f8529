//! Character handlers

use axum::{
    extract::{Query, State},
    Json,
};
use panel_service::{
    CharacterResponse, CharacterService, ExtendedCharacterResponse, PageResponse, SearchQuery,
};

use crate::extractors::{Pagination, StaffUser, ValidPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Search characters by name or steam identifier
///
/// GET /characters?query=&page=
pub async fn search_characters(
    State(state): State<AppState>,
    _staff: StaffUser,
    Query(search): Query<SearchQuery>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PageResponse<CharacterResponse>>> {
    let service = CharacterService::new(state.service_context());
    let response = service.search(search.query.as_deref(), page).await?;
    Ok(Json(response))
}

/// Character with vehicles and owning player
///
/// GET /characters/{id}
pub async fn get_character(
    State(state): State<AppState>,
    _staff: StaffUser,
    ValidPath(character_id): ValidPath<i64>,
) -> ApiResult<Json<ExtendedCharacterResponse>> {
    let service = CharacterService::new(state.service_context());
    let response = service.detail(character_id).await?;
    Ok(Json(response))
}
