//! Service context - dependency container for services
//!
//! Holds the repositories, cache stores, outbound clients and panel settings
//! needed by services.

use std::sync::Arc;

use panel_cache::{
    MaskedProfileStore, PlayerNameStore, ServerPlayerCache, SharedCacheBackend, SteamProfileStore,
};
use panel_common::JwtService;
use panel_core::traits::{
    BanRepository, CharacterRepository, LogRepository, PanelLogRepository, PlayerRepository,
    WarningRepository,
};
use panel_core::RootUsers;

use crate::clients::{GameServerClient, SteamClient};

use super::error::{ServiceError, ServiceResult};

/// Cache lifetimes, in seconds
#[derive(Debug, Clone, Copy)]
pub struct CacheTtls {
    pub server_players: u64,
    pub player_names: u64,
    pub steam_profiles: u64,
}

impl Default for CacheTtls {
    fn default() -> Self {
        Self {
            server_players: 10,
            player_names: 24 * 60 * 60,
            steam_profiles: 24 * 60 * 60,
        }
    }
}

#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    player_repo: Arc<dyn PlayerRepository>,
    character_repo: Arc<dyn CharacterRepository>,
    ban_repo: Arc<dyn BanRepository>,
    warning_repo: Arc<dyn WarningRepository>,
    panel_log_repo: Arc<dyn PanelLogRepository>,
    log_repo: Arc<dyn LogRepository>,

    // Cache stores
    server_player_cache: ServerPlayerCache,
    masked_profile_store: MaskedProfileStore,
    player_name_store: PlayerNameStore,
    steam_profile_store: SteamProfileStore,

    // Outbound clients
    game_server_client: Arc<dyn GameServerClient>,
    steam_client: Option<Arc<dyn SteamClient>>,

    jwt_service: Arc<JwtService>,

    // Settings
    servers: Arc<Vec<String>>,
    root_users: Arc<RootUsers>,
}

impl ServiceContext {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        player_repo: Arc<dyn PlayerRepository>,
        character_repo: Arc<dyn CharacterRepository>,
        ban_repo: Arc<dyn BanRepository>,
        warning_repo: Arc<dyn WarningRepository>,
        panel_log_repo: Arc<dyn PanelLogRepository>,
        log_repo: Arc<dyn LogRepository>,
        cache: SharedCacheBackend,
        ttls: CacheTtls,
        game_server_client: Arc<dyn GameServerClient>,
        steam_client: Option<Arc<dyn SteamClient>>,
        jwt_service: Arc<JwtService>,
        servers: Vec<String>,
        root_users: RootUsers,
    ) -> Self {
        Self {
            player_repo,
            character_repo,
            ban_repo,
            warning_repo,
            panel_log_repo,
            log_repo,
            server_player_cache: ServerPlayerCache::with_ttl(cache.clone(), ttls.server_players),
            masked_profile_store: MaskedProfileStore::new(cache.clone()),
            player_name_store: PlayerNameStore::with_ttl(cache.clone(), ttls.player_names),
            steam_profile_store: SteamProfileStore::with_ttl(cache, ttls.steam_profiles),
            game_server_client,
            steam_client,
            jwt_service,
            servers: Arc::new(servers),
            root_users: Arc::new(root_users),
        }
    }

    // === Repositories ===

    pub fn player_repo(&self) -> &dyn PlayerRepository {
        self.player_repo.as_ref()
    }

    pub fn character_repo(&self) -> &dyn CharacterRepository {
        self.character_repo.as_ref()
    }

    pub fn ban_repo(&self) -> &dyn BanRepository {
        self.ban_repo.as_ref()
    }

    pub fn warning_repo(&self) -> &dyn WarningRepository {
        self.warning_repo.as_ref()
    }

    pub fn panel_log_repo(&self) -> &dyn PanelLogRepository {
        self.panel_log_repo.as_ref()
    }

    pub fn log_repo(&self) -> &dyn LogRepository {
        self.log_repo.as_ref()
    }

    // === Cache Stores ===

    pub fn server_player_cache(&self) -> &ServerPlayerCache {
        &self.server_player_cache
    }

    pub fn masked_profile_store(&self) -> &MaskedProfileStore {
        &self.masked_profile_store
    }

    pub fn player_name_store(&self) -> &PlayerNameStore {
        &self.player_name_store
    }

    pub fn steam_profile_store(&self) -> &SteamProfileStore {
        &self.steam_profile_store
    }

    // === Clients ===

    pub fn game_server_client(&self) -> &dyn GameServerClient {
        self.game_server_client.as_ref()
    }

    /// Steam Web API client, `None` when no API key is configured
    pub fn steam_client(&self) -> Option<&dyn SteamClient> {
        self.steam_client.as_deref()
    }

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    // === Settings ===

    /// Tracked game server addresses, in configured order
    pub fn servers(&self) -> &[String] {
        &self.servers
    }

    pub fn root_users(&self) -> &RootUsers {
        &self.root_users
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("servers", &self.servers)
            .field("root_users", &self.root_users.len())
            .field("steam_client", &self.steam_client.is_some())
            .field("repositories", &"...")
            .field("cache_stores", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    player_repo: Option<Arc<dyn PlayerRepository>>,
    character_repo: Option<Arc<dyn CharacterRepository>>,
    ban_repo: Option<Arc<dyn BanRepository>>,
    warning_repo: Option<Arc<dyn WarningRepository>>,
    panel_log_repo: Option<Arc<dyn PanelLogRepository>>,
    log_repo: Option<Arc<dyn LogRepository>>,
    cache: Option<SharedCacheBackend>,
    ttls: CacheTtls,
    game_server_client: Option<Arc<dyn GameServerClient>>,
    steam_client: Option<Arc<dyn SteamClient>>,
    jwt_service: Option<Arc<JwtService>>,
    servers: Vec<String>,
    root_users: RootUsers,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_repo(mut self, repo: Arc<dyn PlayerRepository>) -> Self {
        self.player_repo = Some(repo);
        self
    }

    pub fn character_repo(mut self, repo: Arc<dyn CharacterRepository>) -> Self {
        self.character_repo = Some(repo);
        self
    }

    pub fn ban_repo(mut self, repo: Arc<dyn BanRepository>) -> Self {
        self.ban_repo = Some(repo);
        self
    }

    pub fn warning_repo(mut self, repo: Arc<dyn WarningRepository>) -> Self {
        self.warning_repo = Some(repo);
        self
    }

    pub fn panel_log_repo(mut self, repo: Arc<dyn PanelLogRepository>) -> Self {
        self.panel_log_repo = Some(repo);
        self
    }

    pub fn log_repo(mut self, repo: Arc<dyn LogRepository>) -> Self {
        self.log_repo = Some(repo);
        self
    }

    pub fn cache(mut self, cache: SharedCacheBackend) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn cache_ttls(mut self, ttls: CacheTtls) -> Self {
        self.ttls = ttls;
        self
    }

    pub fn game_server_client(mut self, client: Arc<dyn GameServerClient>) -> Self {
        self.game_server_client = Some(client);
        self
    }

    pub fn steam_client(mut self, client: Option<Arc<dyn SteamClient>>) -> Self {
        self.steam_client = client;
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn servers(mut self, servers: Vec<String>) -> Self {
        self.servers = servers;
        self
    }

    pub fn root_users(mut self, root_users: RootUsers) -> Self {
        self.root_users = root_users;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let missing = |name: &str| ServiceError::validation(format!("{name} is required"));

        Ok(ServiceContext::new(
            self.player_repo.ok_or_else(|| missing("player_repo"))?,
            self.character_repo.ok_or_else(|| missing("character_repo"))?,
            self.ban_repo.ok_or_else(|| missing("ban_repo"))?,
            self.warning_repo.ok_or_else(|| missing("warning_repo"))?,
            self.panel_log_repo.ok_or_else(|| missing("panel_log_repo"))?,
            self.log_repo.ok_or_else(|| missing("log_repo"))?,
            self.cache.ok_or_else(|| missing("cache"))?,
            self.ttls,
            self.game_server_client
                .ok_or_else(|| missing("game_server_client"))?,
            self.steam_client,
            self.jwt_service.ok_or_else(|| missing("jwt_service"))?,
            self.servers,
            self.root_users,
        ))
    }
}
