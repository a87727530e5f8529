//! Player list entries reported by a game server and their merged form

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of a server's `connections.json` player list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerPlayer {
    pub steam_identifier: String,
    /// Server-side source (slot) id
    pub source: u32,
    #[serde(default)]
    pub character: i64,
    #[serde(default)]
    pub fake_disconnected: bool,
    #[serde(default)]
    pub identity_override: bool,
    #[serde(default)]
    pub name: String,
}

/// A player as seen across all tracked servers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlinePlayer {
    pub id: u32,
    pub character: i64,
    pub server: String,
    pub fake_disconnected: bool,
    /// Set only while an identity override is active
    pub fake_name: Option<String>,
}

impl OnlinePlayer {
    pub fn from_server_player(server: &str, player: &ServerPlayer) -> Self {
        Self {
            id: player.source,
            character: player.character,
            server: server.to_string(),
            fake_disconnected: player.fake_disconnected,
            fake_name: player.identity_override.then(|| player.name.clone()),
        }
    }

    /// Whether the player hides from regular status lookups
    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.fake_disconnected || self.fake_name.is_some()
    }
}

/// Steam identifier to online player, merged over all servers
pub type OnlinePlayers = HashMap<String, OnlinePlayer>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_defaults() {
        let player: ServerPlayer =
            serde_json::from_str(r#"{"steamIdentifier":"steam:1100001aaaa","source":7}"#).unwrap();
        assert_eq!(player.source, 7);
        assert_eq!(player.character, 0);
        assert!(!player.fake_disconnected);
        assert!(!player.identity_override);
    }

    #[test]
    fn test_fake_name_only_with_override() {
        let mut player = ServerPlayer {
            steam_identifier: "steam:1100001aaaa".to_string(),
            source: 3,
            character: 12,
            fake_disconnected: false,
            identity_override: false,
            name: "Jane".to_string(),
        };
        let online = OnlinePlayer::from_server_player("c1s1.example.com", &player);
        assert_eq!(online.fake_name, None);
        assert!(!online.is_hidden());

        player.identity_override = true;
        let online = OnlinePlayer::from_server_player("c1s1.example.com", &player);
        assert_eq!(online.fake_name.as_deref(), Some("Jane"));
        assert!(online.is_hidden());
    }
}
