//! Value objects - immutable types that represent domain concepts

mod identifier;
mod player_status;
mod roles;
mod server_player;
mod steam_identifier;

pub use identifier::{Identifier, IdentifierKind, IdentifierParseError};
pub use player_status::{server_name, OnlineState, PlayerStatus};
pub use roles::{PlayerRoles, RootUsers, StoredRoleFlags};
pub use server_player::{OnlinePlayer, OnlinePlayers, ServerPlayer};
pub use steam_identifier::{
    SteamIdentifier, SteamIdentifierError, MASKED_PREFIX, REAL_PREFIX, STEAM_INVITE_URL,
    STEAM_PREFIX,
};
