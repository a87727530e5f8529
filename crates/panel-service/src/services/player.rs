//! Player service
//!
//! Resolves players by steam identifier, including masked identities, and
//! assembles profile pages.

use chrono::Utc;
use panel_core::{
    Character, Identifier, PageRequest, Player, PlayerSearch, PlayerStatus, SteamIdentifier,
};
use tracing::{debug, instrument, warn};

use crate::dto::{
    BanResponse, CharacterResponse, IdentifierResponse, PageResponse, PanelLogResponse,
    PlayerDetailResponse, PlayerProfileResponse, PlayerResponse, WarningResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::status::StatusService;

/// Panel logs shown on a profile page
const PROFILE_PANEL_LOGS: u32 = 30;

/// A player looked up by identifier
#[derive(Debug, Clone)]
pub enum ResolvedPlayer {
    Player(Box<Player>),
    /// Cached profile of a masked identity
    Masked(Box<PlayerDetailResponse>),
}

pub struct PlayerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PlayerService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Look up a player by steam identifier
    ///
    /// Masked identifiers (`steam:1100002…`) resolve to a profile built while
    /// the owner is online under the mask, or to the last cached one.
    #[instrument(skip(self))]
    pub async fn resolve_player(&self, identifier: &str) -> ServiceResult<ResolvedPlayer> {
        let steam = SteamIdentifier::parse(identifier)
            .map_err(|_| ServiceError::not_found("Player", identifier))?;

        if steam.is_masked() {
            return self
                .resolve_masked(&steam)
                .await
                .map(|profile| ResolvedPlayer::Masked(Box::new(profile)));
        }

        self.ctx
            .player_repo()
            .find_by_steam(steam.as_str())
            .await?
            .map(|player| ResolvedPlayer::Player(Box::new(player)))
            .ok_or_else(|| ServiceError::not_found("Player", identifier))
    }

    async fn resolve_masked(&self, masked: &SteamIdentifier) -> ServiceResult<PlayerDetailResponse> {
        let real = masked.unmasked();
        let store = self.ctx.masked_profile_store();

        let status = StatusService::new(self.ctx)
            .online_status(real.as_str(), false, true)
            .await;

        if status.fake_name.is_some() && status.character != 0 {
            let player = self
                .ctx
                .player_repo()
                .find_by_steam(real.as_str())
                .await?
                .ok_or_else(|| ServiceError::not_found("Player", real.as_str()))?;

            let characters: Vec<Character> = self
                .ctx
                .character_repo()
                .find_by_id(status.character)
                .await?
                .into_iter()
                .collect();

            let profile = build_masked_profile(masked, &player, &status, &characters);
            if let Err(e) = store.put(real.as_str(), &profile).await {
                warn!(real = %real, error = %e, "Failed to store masked profile");
            }

            debug!(masked = %masked, "Built masked profile");
            return Ok(profile);
        }

        let cached: Option<PlayerDetailResponse> =
            store.get(real.as_str()).await.unwrap_or_else(|e| {
                warn!(real = %real, error = %e, "Failed to read masked profile");
                None
            });

        let Some(mut profile) = cached else {
            return Err(ServiceError::not_found("Player", masked.as_str()));
        };

        mark_offline(&mut profile);
        if let Err(e) = store.put(real.as_str(), &profile).await {
            warn!(real = %real, error = %e, "Failed to store masked profile");
        }

        Ok(profile)
    }

    /// Profile page for any identifier, real or masked
    pub async fn profile(&self, identifier: &str) -> ServiceResult<PlayerDetailResponse> {
        match self.resolve_player(identifier).await? {
            ResolvedPlayer::Player(player) => self.player_detail(&player).await,
            ResolvedPlayer::Masked(profile) => Ok(*profile),
        }
    }

    /// Profile page of a real player
    #[instrument(skip(self, player), fields(steam = %player.steam_identifier))]
    pub async fn player_detail(&self, player: &Player) -> ServiceResult<PlayerDetailResponse> {
        let characters = self
            .ctx
            .character_repo()
            .find_by_steam(&player.steam_identifier)
            .await?;
        let warnings = self
            .ctx
            .warning_repo()
            .find_by_player(player.user_id)
            .await?;
        let warning_count = self
            .ctx
            .warning_repo()
            .count_by_player(player.user_id)
            .await?;
        let panel_logs = self
            .ctx
            .panel_log_repo()
            .list(
                Some(&player.steam_identifier),
                PageRequest::new(1, PROFILE_PANEL_LOGS),
            )
            .await?;
        let bans = self
            .ctx
            .ban_repo()
            .find_by_identifiers(&player.all_identifiers())
            .await?;

        let status = StatusService::new(self.ctx)
            .online_status(&player.steam_identifier, true, false)
            .await;
        let avatar = self.steam_avatar(player).await;

        let roles = player.roles(self.ctx.root_users());
        let ban = player.active_ban(&bans, Utc::now()).map(BanResponse::from);
        let steam = player.steam_id();

        let profile = PlayerProfileResponse {
            id: player.user_id,
            avatar: Some(Player::avatar_url(avatar.as_deref())),
            discord: Some(player.discord_id()).filter(|id| !id.is_empty()),
            steam_identifier: player.steam_identifier.clone(),
            override_steam: None,
            steam36: steam.as_ref().map(SteamIdentifier::steam36).unwrap_or_default(),
            player_name: player.player_name.clone(),
            play_time: player.playtime,
            last_connection: player.last_connection,
            steam_profile_url: player.steam_profile_url().unwrap_or_default(),
            is_trusted: roles.is_trusted(),
            is_debugger: roles.is_debugger(),
            is_panel_trusted: roles.is_panel_trusted(),
            is_staff: roles.is_staff(),
            is_super_admin: roles.is_super_admin(),
            is_root: roles.is_root(),
            is_banned: ban.is_some(),
            warnings: warning_count,
            ban,
            status,
            identifiers: player
                .all_identifiers()
                .iter()
                .filter(|identifier| Identifier::is_valid(identifier))
                .map(|identifier| IdentifierResponse::labelled(identifier))
                .collect(),
        };

        Ok(PlayerDetailResponse {
            player: profile,
            characters: characters.iter().map(CharacterResponse::from).collect(),
            warnings: warnings.into_iter().map(WarningResponse::from).collect(),
            panel_logs: panel_logs
                .into_iter()
                .take(PROFILE_PANEL_LOGS as usize)
                .map(PanelLogResponse::from)
                .collect(),
        })
    }

    /// Search by name, or exactly by steam identifier
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        query: Option<&str>,
        page: PageRequest,
    ) -> ServiceResult<PageResponse<PlayerResponse>> {
        let search = PlayerSearch::new(query);
        let rows = self.ctx.player_repo().search(&search, page).await?;
        Ok(PageResponse::from_lookahead(rows, page).map(PlayerResponse::from))
    }

    /// Real player by steam identifier
    pub async fn find_player(&self, steam_identifier: &str) -> ServiceResult<Player> {
        self.ctx
            .player_repo()
            .find_by_steam(steam_identifier)
            .await?
            .ok_or_else(|| ServiceError::not_found("Player", steam_identifier))
    }

    /// Characters of a player, by slot
    pub async fn characters(&self, steam_identifier: &str) -> ServiceResult<Vec<CharacterResponse>> {
        let player = self.find_player(steam_identifier).await?;
        let characters = self
            .ctx
            .character_repo()
            .find_by_steam(&player.steam_identifier)
            .await?;
        Ok(characters.iter().map(CharacterResponse::from).collect())
    }

    /// Steam avatar URL, when a Steam client is configured and Steam knows the
    /// account
    pub(crate) async fn steam_avatar(&self, player: &Player) -> Option<String> {
        let steam64 = player.steam_id()?.steam64();
        let store = self.ctx.steam_profile_store();

        match store.get(steam64).await {
            Ok(Some(profile)) => return profile.avatar,
            Ok(None) => {}
            Err(e) => warn!(steam64, error = %e, "Steam profile cache read failed"),
        }

        let client = self.ctx.steam_client()?;
        let profile = match client.player_summary(steam64).await {
            Ok(profile) => profile?,
            Err(e) => {
                warn!(steam64, error = %e, "Steam profile lookup failed");
                return None;
            }
        };

        if let Err(e) = store.put(steam64, &profile).await {
            warn!(steam64, error = %e, "Steam profile cache write failed");
        }
        profile.avatar
    }
}

/// Profile shown for a masked identity while its owner is online under it
///
/// Carries the fake name, the masked identifiers and the real player's
/// playtime; every role and moderation field is blanked.
pub fn build_masked_profile(
    masked: &SteamIdentifier,
    real: &Player,
    status: &PlayerStatus,
    characters: &[Character],
) -> PlayerDetailResponse {
    let mut profile_url = real.steam_profile_url().unwrap_or_default();
    profile_url.push('f');

    let mut masked_status = status.clone();
    masked_status.fake_name = None;

    let player = PlayerProfileResponse {
        id: real.user_id,
        avatar: None,
        discord: None,
        steam_identifier: masked.as_str().to_string(),
        override_steam: Some(masked.unmasked().as_str().to_string()),
        steam36: masked.steam36(),
        player_name: status.fake_name.clone().unwrap_or_default(),
        play_time: real.playtime,
        last_connection: real.last_connection,
        steam_profile_url: profile_url,
        is_trusted: false,
        is_debugger: false,
        is_panel_trusted: false,
        is_staff: false,
        is_super_admin: false,
        is_root: false,
        is_banned: false,
        warnings: 0,
        ban: None,
        status: masked_status,
        identifiers: Vec::new(),
    };

    PlayerDetailResponse {
        player,
        characters: characters.iter().map(CharacterResponse::from).collect(),
        warnings: Vec::new(),
        panel_logs: Vec::new(),
    }
}

/// Rewrite a cached masked profile as offline
pub fn mark_offline(profile: &mut PlayerDetailResponse) {
    profile.player.status.set_offline();
}
