//! Game server handlers

use axum::{
    extract::{Query, State},
    Json,
};
use panel_service::{OnlinePlayersResponse, StatusQuery, StatusService};

use crate::extractors::StaffUser;
use crate::state::AppState;

/// Online players across every tracked server
///
/// GET /servers/players?fresh=
pub async fn get_online_players(
    State(state): State<AppState>,
    _staff: StaffUser,
    Query(query): Query<StatusQuery>,
) -> Json<OnlinePlayersResponse> {
    let service = StatusService::new(state.service_context());
    let players = service.all_online_players(!query.fresh).await;

    Json(OnlinePlayersResponse {
        available: players.is_some(),
        players: players.unwrap_or_default(),
    })
}
