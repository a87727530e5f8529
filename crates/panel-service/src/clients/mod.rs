//! Outbound HTTP clients

mod game_server;
mod steam;

pub use game_server::{GameServerClient, GameServerError, HttpGameServerClient};
pub use steam::{HttpSteamClient, SteamClient, SteamClientError};
