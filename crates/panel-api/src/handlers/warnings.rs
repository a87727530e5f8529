//! Warning handlers

use axum::extract::State;
use panel_service::WarningService;

use crate::extractors::{StaffUser, ValidPath};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Delete a warning, as its issuer or a super admin
///
/// DELETE /warnings/{id}
pub async fn delete_warning(
    State(state): State<AppState>,
    StaffUser(staff): StaffUser,
    ValidPath(warning_id): ValidPath<i64>,
) -> ApiResult<NoContent> {
    let service = WarningService::new(state.service_context());
    service.delete(&staff, warning_id).await?;
    Ok(NoContent)
}
