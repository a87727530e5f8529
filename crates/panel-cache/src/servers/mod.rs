//! Game server data

mod server_players;

pub use server_players::ServerPlayerCache;
