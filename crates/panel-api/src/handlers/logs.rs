//! Log listing handler

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use panel_service::{LogListResponse, LogQuery, LogService};

use crate::extractors::StaffUser;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Filtered player logs, 15 per page
///
/// GET /logs?identifier=&before=&after=&server=&action=&details=&page=
pub async fn list_logs(
    State(state): State<AppState>,
    _staff: StaffUser,
    query: Result<Query<LogQuery>, QueryRejection>,
) -> ApiResult<Json<LogListResponse>> {
    let Query(query) = query.map_err(|e| ApiError::invalid_query(e.body_text()))?;
    let service = LogService::new(state.service_context());
    let response = service.list(query).await?;
    Ok(Json(response))
}
