//! Online status service
//!
//! Polls every configured game server's player list, caching each list
//! per server, and answers where a player is currently connected.

use futures::future::join_all;
use panel_core::{OnlinePlayer, OnlinePlayers, PlayerStatus, ServerPlayer};
use tracing::{debug, instrument, warn};

use super::context::ServiceContext;

pub struct StatusService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatusService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Steam identifier to online player across all servers
    ///
    /// Returns `None` when any server's player list is unavailable.
    #[instrument(skip(self))]
    pub async fn all_online_players(&self, use_cache: bool) -> Option<OnlinePlayers> {
        let servers = self.ctx.servers();
        let lists = join_all(
            servers
                .iter()
                .map(|server| self.server_players(server, use_cache)),
        )
        .await;

        merge_player_lists(servers.iter().map(String::as_str).zip(lists))
    }

    /// Online status of one player
    ///
    /// Unless `true_status` is set, players hiding behind a fake disconnect
    /// or a fake name are reported offline.
    #[instrument(skip(self))]
    pub async fn online_status(
        &self,
        steam_identifier: &str,
        use_cache: bool,
        true_status: bool,
    ) -> PlayerStatus {
        if self.ctx.servers().is_empty() {
            return PlayerStatus::unavailable();
        }

        let players = self.all_online_players(use_cache).await;
        decide_status(players.as_ref(), steam_identifier, true_status)
    }

    /// Player list of one server, `None` if it cannot be fetched
    async fn server_players(&self, server: &str, use_cache: bool) -> Option<Vec<ServerPlayer>> {
        let cache = self.ctx.server_player_cache();

        if use_cache {
            match cache.get(server).await {
                Ok(Some(players)) => return Some(players),
                Ok(None) => {}
                Err(e) => warn!(server = %server, error = %e, "Server player cache read failed"),
            }
        }

        let players = match self.ctx.game_server_client().fetch_players(server).await {
            Ok(players) => players,
            Err(e) => {
                warn!(server = %server, error = %e, "Failed to fetch server player list");
                return None;
            }
        };

        debug!(server = %server, players = players.len(), "Fetched server player list");

        if let Err(e) = cache.put(server, &players).await {
            warn!(server = %server, error = %e, "Server player cache write failed");
        }

        Some(players)
    }
}

/// Merge per-server player lists in server order; the first server listing a
/// player wins. Any missing list makes the whole result unavailable.
pub fn merge_player_lists<'s, I>(lists: I) -> Option<OnlinePlayers>
where
    I: IntoIterator<Item = (&'s str, Option<Vec<ServerPlayer>>)>,
{
    let mut merged = OnlinePlayers::new();

    for (server, players) in lists {
        for player in players? {
            merged
                .entry(player.steam_identifier.clone())
                .or_insert_with(|| OnlinePlayer::from_server_player(server, &player));
        }
    }

    Some(merged)
}

/// Status of a player given the merged online players
pub fn decide_status(
    players: Option<&OnlinePlayers>,
    steam_identifier: &str,
    true_status: bool,
) -> PlayerStatus {
    let Some(players) = players else {
        return PlayerStatus::unavailable();
    };

    match players.get(steam_identifier) {
        Some(player) if true_status || !player.is_hidden() => PlayerStatus::online(
            player.server.clone(),
            player.id,
            player.character,
            player.fake_name.clone(),
        ),
        _ => PlayerStatus::offline(),
    }
}
