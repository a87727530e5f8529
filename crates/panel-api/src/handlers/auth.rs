//! Staff session handlers

use axum::{extract::State, Json};
use panel_service::{AuthResponse, AuthService, RefreshTokenRequest, StaffResponse};

use crate::extractors::StaffUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Exchange a refresh token for a new token pair
///
/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh(&request.refresh_token).await?;
    Ok(Json(response))
}

/// The authenticated staff member
///
/// GET /auth/me
pub async fn get_current_staff(
    State(state): State<AppState>,
    StaffUser(staff): StaffUser,
) -> Json<StaffResponse> {
    let service = AuthService::new(state.service_context());
    Json(service.me(&staff).await)
}
