//! Player entity - a row of the `users` table

use chrono::{DateTime, Utc};

use crate::entities::Ban;
use crate::value_objects::{
    IdentifierKind, PlayerRoles, RootUsers, SteamIdentifier, StoredRoleFlags,
};

/// Avatar shown when no Steam profile picture is known
pub const DEFAULT_AVATAR_URL: &str =
    "https://cdn.pixabay.com/photo/2015/10/05/22/37/blank-profile-picture-973460_960_720.png";

/// Player entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub user_id: i64,
    pub steam_identifier: String,
    pub player_name: String,
    pub identifiers: Vec<String>,
    pub is_staff: bool,
    pub is_super_admin: bool,
    pub is_trusted: bool,
    pub is_panel_trusted: bool,
    pub is_debugger: bool,
    pub is_soft_banned: bool,
    /// Seconds played
    pub playtime: i64,
    pub total_joins: i64,
    pub priority_level: i32,
    pub last_connection: Option<DateTime<Utc>>,
}

impl Player {
    /// Create a player with no flags and no play history
    pub fn new(user_id: i64, steam_identifier: String, player_name: String) -> Self {
        Self {
            user_id,
            steam_identifier,
            player_name,
            identifiers: Vec::new(),
            is_staff: false,
            is_super_admin: false,
            is_trusted: false,
            is_panel_trusted: false,
            is_debugger: false,
            is_soft_banned: false,
            playtime: 0,
            total_joins: 0,
            priority_level: 0,
            last_connection: None,
        }
    }

    /// Stored identifiers followed by the steam identifier, without duplicates
    pub fn all_identifiers(&self) -> Vec<String> {
        let mut all: Vec<String> = Vec::with_capacity(self.identifiers.len() + 1);
        for identifier in self
            .identifiers
            .iter()
            .chain(std::iter::once(&self.steam_identifier))
        {
            if !all.contains(identifier) {
                all.push(identifier.clone());
            }
        }
        all
    }

    /// Identifiers that a ban can be issued against (everything except `ip:`)
    pub fn bannable_identifiers(&self) -> Vec<String> {
        self.all_identifiers()
            .into_iter()
            .filter(|identifier| {
                let prefix = identifier.split(':').next().unwrap_or_default();
                IdentifierKind::from_prefix(prefix).map_or(true, |kind| kind.is_bannable())
            })
            .collect()
    }

    /// First identifier starting with `prefix`
    pub fn identifier(&self, prefix: &str) -> Option<String> {
        self.all_identifiers()
            .into_iter()
            .find(|identifier| identifier.starts_with(prefix))
    }

    /// Discord user id, empty when the player never linked Discord
    pub fn discord_id(&self) -> String {
        self.identifier("discord:")
            .and_then(|identifier| identifier.strip_prefix("discord:").map(str::to_string))
            .unwrap_or_default()
    }

    pub fn steam_id(&self) -> Option<SteamIdentifier> {
        SteamIdentifier::parse(&self.steam_identifier).ok()
    }

    pub fn steam_profile_url(&self) -> Option<String> {
        self.steam_id().map(|steam| steam.profile_url())
    }

    /// Effective roles, with root evaluated against the configured list
    pub fn roles(&self, root_users: &RootUsers) -> PlayerRoles {
        let stored = StoredRoleFlags {
            is_trusted: self.is_trusted,
            is_staff: self.is_staff,
            is_super_admin: self.is_super_admin,
            is_panel_trusted: self.is_panel_trusted,
            is_debugger: self.is_debugger,
        };
        PlayerRoles::resolve(stored, root_users.contains(&self.steam_identifier))
    }

    /// The ban on this player's steam identifier that is still in effect
    pub fn active_ban<'a>(&self, bans: &'a [Ban], now: DateTime<Utc>) -> Option<&'a Ban> {
        bans.iter()
            .find(|ban| ban.identifier == self.steam_identifier && ban.is_active(now))
    }

    /// Steam avatar if known, the blank profile picture otherwise
    pub fn avatar_url(steam_avatar: Option<&str>) -> String {
        steam_avatar
            .filter(|avatar| !avatar.is_empty())
            .unwrap_or(DEFAULT_AVATAR_URL)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn player() -> Player {
        let mut player = Player::new(
            1,
            "steam:110000112345678".to_string(),
            "Tester".to_string(),
        );
        player.identifiers = vec![
            "license:abc".to_string(),
            "ip:127.0.0.1".to_string(),
            "discord:424242".to_string(),
            "steam:110000112345678".to_string(),
            "license:abc".to_string(),
        ];
        player
    }

    fn ban(identifier: &str, expire: Option<i64>, age: Duration) -> Ban {
        Ban {
            id: 1,
            ban_hash: "hash".to_string(),
            identifier: identifier.to_string(),
            creator_name: None,
            creator_identifier: None,
            reason: None,
            timestamp: Utc::now() - age,
            expire,
        }
    }

    #[test]
    fn test_all_identifiers_dedupes_in_order() {
        assert_eq!(
            player().all_identifiers(),
            vec![
                "license:abc",
                "ip:127.0.0.1",
                "discord:424242",
                "steam:110000112345678",
            ]
        );
    }

    #[test]
    fn test_steam_identifier_appended_when_missing() {
        let mut player = player();
        player.identifiers = vec!["license:abc".to_string()];
        assert_eq!(
            player.all_identifiers(),
            vec!["license:abc", "steam:110000112345678"]
        );
    }

    #[test]
    fn test_bannable_identifiers_skip_ip() {
        let bannable = player().bannable_identifiers();
        assert!(!bannable.iter().any(|id| id.starts_with("ip:")));
        assert_eq!(bannable.len(), 3);
    }

    #[test]
    fn test_identifier_by_prefix() {
        let player = player();
        assert_eq!(player.identifier("license:").as_deref(), Some("license:abc"));
        assert_eq!(player.identifier("xbl:"), None);
        assert_eq!(player.discord_id(), "424242");
    }

    #[test]
    fn test_discord_id_empty_when_missing() {
        let player = Player::new(2, "steam:1100001aaaa".to_string(), "No Discord".to_string());
        assert_eq!(player.discord_id(), "");
    }

    #[test]
    fn test_roles_with_root() {
        let player = player();
        let roots = RootUsers::new(["steam:110000112345678"]);
        let roles = player.roles(&roots);
        assert!(roles.is_root());
        assert!(roles.is_staff());

        let roles = player.roles(&RootUsers::default());
        assert!(!roles.is_staff());
    }

    #[test]
    fn test_active_ban() {
        let player = player();
        let now = Utc::now();

        let bans = vec![
            ban("license:abc", None, Duration::hours(1)),
            ban("steam:110000112345678", Some(60), Duration::hours(1)),
        ];
        assert!(player.active_ban(&bans, now).is_none());

        let bans = vec![ban("steam:110000112345678", None, Duration::days(400))];
        assert!(player.active_ban(&bans, now).is_some());

        let bans = vec![ban("steam:110000112345678", Some(7200), Duration::hours(1))];
        assert!(player.active_ban(&bans, now).is_some());
    }

    #[test]
    fn test_profile_url_and_avatar() {
        let player = player();
        assert_eq!(
            player.steam_profile_url().as_deref(),
            Some("http://s.team/p/cdfg-hjkm")
        );
        assert_eq!(Player::avatar_url(None), DEFAULT_AVATAR_URL);
        assert_eq!(Player::avatar_url(Some("")), DEFAULT_AVATAR_URL);
        assert_eq!(Player::avatar_url(Some("https://a/b.jpg")), "https://a/b.jpg");
    }
}
