//! Ban handlers

use axum::{extract::State, Json};
use panel_service::{BanResponse, BanService, PageResponse};

use crate::extractors::{Pagination, StaffUser, ValidPath};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// All bans, one entry per ban hash
///
/// GET /bans?page=
pub async fn list_bans(
    State(state): State<AppState>,
    _staff: StaffUser,
    Pagination(page): Pagination,
) -> ApiResult<Json<PageResponse<BanResponse>>> {
    let service = BanService::new(state.service_context());
    let response = service.list(page).await?;
    Ok(Json(response))
}

/// Lift a ban
///
/// DELETE /bans/{hash}
pub async fn lift_ban(
    State(state): State<AppState>,
    StaffUser(staff): StaffUser,
    ValidPath(ban_hash): ValidPath<String>,
) -> ApiResult<NoContent> {
    let service = BanService::new(state.service_context());
    service.lift(&staff, &ban_hash).await?;
    Ok(NoContent)
}
