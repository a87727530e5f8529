//! Entity to DTO mappers

use panel_core::{Ban, Character, Identifier, LogEntry, PanelLog, Player, Vehicle, Warning};

use super::responses::{
    BanResponse, CharacterResponse, IdentifierResponse, LogResponse, PanelLogResponse,
    PlayerResponse, VehicleResponse, WarningResponse,
};

// ============================================================================
// Player Mappers
// ============================================================================

impl From<&Player> for PlayerResponse {
    fn from(player: &Player) -> Self {
        Self {
            id: player.user_id,
            steam_identifier: player.steam_identifier.clone(),
            player_name: player.player_name.clone(),
            play_time: player.playtime,
            total_joins: player.total_joins,
            last_connection: player.last_connection,
            is_staff: player.is_staff,
            is_super_admin: player.is_super_admin,
            is_trusted: player.is_trusted,
            is_soft_banned: player.is_soft_banned,
        }
    }
}

impl From<Player> for PlayerResponse {
    fn from(player: Player) -> Self {
        Self::from(&player)
    }
}

impl IdentifierResponse {
    pub fn labelled(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            label: Identifier::label_for(identifier).map(str::to_string),
        }
    }
}

// ============================================================================
// Character Mappers
// ============================================================================

impl From<&Character> for CharacterResponse {
    fn from(character: &Character) -> Self {
        Self {
            id: character.character_id,
            steam_identifier: character.steam_identifier.clone(),
            slot: character.character_slot,
            gender: character.gender,
            first_name: character.first_name.clone(),
            last_name: character.last_name.clone(),
            name: character.name(),
            date_of_birth: character.date_of_birth,
            cash: character.cash,
            bank: character.bank,
            money: character.money(),
            stocks_balance: character.stocks_balance,
            job_name: character.job_name.clone(),
            department_name: character.department_name.clone(),
            position_name: character.position_name.clone(),
            backstory: character.backstory.clone(),
            character_deleted: character.character_deleted,
            character_deletion_timestamp: character.character_deletion_timestamp,
        }
    }
}

impl From<Character> for CharacterResponse {
    fn from(character: Character) -> Self {
        Self::from(&character)
    }
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.vehicle_id,
            owner_cid: vehicle.owner_cid,
            model_name: vehicle.model_name,
            plate: vehicle.plate,
            garage_identifier: vehicle.garage_identifier,
            mileage: vehicle.mileage,
        }
    }
}

// ============================================================================
// Moderation Mappers
// ============================================================================

impl From<&Ban> for BanResponse {
    fn from(ban: &Ban) -> Self {
        Self {
            id: ban.id,
            ban_hash: ban.ban_hash.clone(),
            identifier: ban.identifier.clone(),
            creator_name: ban.creator_name.clone(),
            creator_identifier: ban.creator_identifier.clone(),
            reason: ban.reason.clone(),
            timestamp: ban.timestamp,
            expire: ban.expire,
            expires_at: ban.expires_at(),
            is_permanent: ban.is_permanent(),
        }
    }
}

impl From<Ban> for BanResponse {
    fn from(ban: Ban) -> Self {
        Self::from(&ban)
    }
}

impl From<Warning> for WarningResponse {
    fn from(warning: Warning) -> Self {
        Self {
            id: warning.id,
            player_id: warning.player_id,
            issuer_id: warning.issuer_id,
            message: warning.message,
            warning_type: warning.warning_type.as_str().to_string(),
            created_at: warning.created_at,
            updated_at: warning.updated_at,
        }
    }
}

impl From<PanelLog> for PanelLogResponse {
    fn from(log: PanelLog) -> Self {
        Self {
            id: log.id,
            source_identifier: log.source_identifier,
            target_identifier: log.target_identifier,
            action: log.action,
            log: log.log,
            timestamp: log.timestamp,
        }
    }
}

// ============================================================================
// Log Mappers
// ============================================================================

impl From<LogEntry> for LogResponse {
    fn from(entry: LogEntry) -> Self {
        Self {
            server_id: entry.server_id(),
            id: entry.id,
            steam_identifier: entry.identifier,
            action: entry.action,
            details: entry.details,
            metadata: entry.metadata,
            timestamp: entry.timestamp,
        }
    }
}
