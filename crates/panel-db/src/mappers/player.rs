//! Player model -> entity

use panel_core::entities::Player;

use crate::models::PlayerModel;

impl From<PlayerModel> for Player {
    fn from(model: PlayerModel) -> Self {
        Player {
            user_id: model.user_id,
            steam_identifier: model.steam_identifier,
            player_name: model.player_name,
            identifiers: model.identifiers.0,
            is_staff: model.is_staff,
            is_super_admin: model.is_super_admin,
            is_trusted: model.is_trusted,
            is_panel_trusted: model.is_panel_trusted,
            is_debugger: model.is_debugger,
            is_soft_banned: model.is_soft_banned,
            playtime: model.playtime,
            total_joins: model.total_joins,
            priority_level: model.priority_level,
            last_connection: model.last_connection,
        }
    }
}
