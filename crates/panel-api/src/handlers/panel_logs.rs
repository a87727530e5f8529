//! Panel log handler

use axum::{
    extract::{Query, State},
    Json,
};
use panel_service::{PageResponse, PanelLogQuery, PanelLogResponse, PanelLogService};

use crate::extractors::{Pagination, StaffUser};
use crate::response::ApiResult;
use crate::state::AppState;

/// Staff actions, newest first
///
/// GET /panel-logs?identifier=&page=
pub async fn list_panel_logs(
    State(state): State<AppState>,
    _staff: StaffUser,
    Query(query): Query<PanelLogQuery>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PageResponse<PanelLogResponse>>> {
    let service = PanelLogService::new(state.service_context());
    let response = service.list(query.identifier.as_deref(), page).await?;
    Ok(Json(response))
}
