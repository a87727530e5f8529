//! Staff authentication extractor
//!
//! Validates the bearer access token and loads the staff member it names.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use panel_core::Player;
use panel_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated staff member
#[derive(Debug, Clone)]
pub struct StaffUser(pub Player);

impl StaffUser {
    pub fn player(&self) -> &Player {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for StaffUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let claims = app_state
            .jwt_service()
            .validate_access_token(bearer.token())
            .map_err(|e| {
                tracing::debug!(error = %e, "Rejected access token");
                ApiError::App(e)
            })?;

        let steam = claims.steam_identifier()?;

        let staff = AuthService::new(app_state.service_context())
            .staff_member(steam.as_str())
            .await?;

        Ok(StaffUser(staff))
    }
}
