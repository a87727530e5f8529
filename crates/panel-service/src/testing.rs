//! In-memory repositories and clients for service tests

use async_trait::async_trait;
use chrono::Utc;
use panel_cache::MemoryCache;
use panel_common::JwtService;
use panel_core::traits::{
    BanRepository, CharacterRepository, LogRepository, PanelLogRepository, PlayerRepository,
    WarningRepository,
};
use panel_core::{
    Ban, Character, LogEntry, LogFilter, NewBan, NewPanelLog, NewWarning, PageRequest, PanelLog,
    Player, PlayerSearch, RepoResult, RootUsers, ServerPlayer, Vehicle, Warning,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::clients::{GameServerClient, GameServerError};
use crate::services::{ServiceContext, ServiceContextBuilder};

pub const TEST_JWT_SECRET: &str = "test-secret-key-for-service-tests";

fn page_slice<T: Clone>(rows: &[T], page: PageRequest) -> Vec<T> {
    rows.iter()
        .skip(page.offset() as usize)
        .take(page.fetch_limit() as usize)
        .cloned()
        .collect()
}

/// All tables in one place
#[derive(Default)]
pub struct FakeDb {
    pub players: Mutex<Vec<Player>>,
    pub characters: Mutex<Vec<Character>>,
    pub vehicles: Mutex<Vec<Vehicle>>,
    pub bans: Mutex<Vec<Ban>>,
    pub warnings: Mutex<Vec<Warning>>,
    pub panel_logs: Mutex<Vec<PanelLog>>,
    pub logs: Mutex<Vec<LogEntry>>,
}

impl FakeDb {
    pub fn add_player(&self, player: Player) {
        self.players.lock().unwrap().push(player);
    }

    pub fn add_character(&self, character: Character) {
        self.characters.lock().unwrap().push(character);
    }

    pub fn add_log(&self, entry: LogEntry) {
        self.logs.lock().unwrap().push(entry);
    }

    pub fn panel_log_actions(&self) -> Vec<String> {
        self.panel_logs
            .lock()
            .unwrap()
            .iter()
            .map(|log| log.action.clone())
            .collect()
    }
}

#[async_trait]
impl PlayerRepository for FakeDb {
    async fn find_by_id(&self, user_id: i64) -> RepoResult<Option<Player>> {
        Ok(self
            .players
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn find_by_steam(&self, steam_identifier: &str) -> RepoResult<Option<Player>> {
        Ok(self
            .players
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.steam_identifier == steam_identifier)
            .cloned())
    }

    async fn search(&self, search: &PlayerSearch, page: PageRequest) -> RepoResult<Vec<Player>> {
        let mut rows: Vec<Player> = self
            .players
            .lock()
            .unwrap()
            .iter()
            .filter(|p| match search.query.as_deref() {
                None => true,
                Some(q) if search.is_steam_lookup() => p.steam_identifier == q,
                Some(q) => p.player_name.to_lowercase().contains(&q.to_lowercase()),
            })
            .cloned()
            .collect();
        rows.sort_by_key(|p| p.user_id);
        Ok(page_slice(&rows, page))
    }

    async fn find_names(&self, steam_identifiers: &[String]) -> RepoResult<Vec<(String, String)>> {
        Ok(self
            .players
            .lock()
            .unwrap()
            .iter()
            .filter(|p| steam_identifiers.contains(&p.steam_identifier))
            .map(|p| (p.steam_identifier.clone(), p.player_name.clone()))
            .collect())
    }
}

#[async_trait]
impl CharacterRepository for FakeDb {
    async fn find_by_id(&self, character_id: i64) -> RepoResult<Option<Character>> {
        Ok(self
            .characters
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.character_id == character_id)
            .cloned())
    }

    async fn find_by_steam(&self, steam_identifier: &str) -> RepoResult<Vec<Character>> {
        let mut rows: Vec<Character> = self
            .characters
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.steam_identifier == steam_identifier)
            .cloned()
            .collect();
        rows.sort_by_key(|c| c.character_slot);
        Ok(rows)
    }

    async fn search(&self, query: Option<&str>, page: PageRequest) -> RepoResult<Vec<Character>> {
        let rows: Vec<Character> = self
            .characters
            .lock()
            .unwrap()
            .iter()
            .filter(|c| match query {
                None => true,
                Some(q) => {
                    c.steam_identifier == q || c.name().to_lowercase().contains(&q.to_lowercase())
                }
            })
            .cloned()
            .collect();
        Ok(page_slice(&rows, page))
    }

    async fn find_vehicles(&self, character_id: i64) -> RepoResult<Vec<Vehicle>> {
        Ok(self
            .vehicles
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.owner_cid == character_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl BanRepository for FakeDb {
    async fn find_by_identifiers(&self, identifiers: &[String]) -> RepoResult<Vec<Ban>> {
        Ok(self
            .bans
            .lock()
            .unwrap()
            .iter()
            .filter(|b| identifiers.contains(&b.identifier))
            .cloned()
            .collect())
    }

    async fn find_by_hash(&self, ban_hash: &str) -> RepoResult<Vec<Ban>> {
        Ok(self
            .bans
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.ban_hash == ban_hash)
            .cloned()
            .collect())
    }

    async fn list(&self, page: PageRequest) -> RepoResult<Vec<Ban>> {
        let bans = self.bans.lock().unwrap();
        let mut seen = Vec::new();
        let mut rows = Vec::new();
        for ban in bans.iter().rev() {
            if !seen.contains(&ban.ban_hash) {
                seen.push(ban.ban_hash.clone());
                rows.push(ban.clone());
            }
        }
        Ok(page_slice(&rows, page))
    }

    async fn create_many(&self, new_bans: &[NewBan]) -> RepoResult<()> {
        let mut bans = self.bans.lock().unwrap();
        let now = Utc::now();
        for new in new_bans {
            let id = bans.len() as i64 + 1;
            bans.push(Ban {
                id,
                ban_hash: new.ban_hash.clone(),
                identifier: new.identifier.clone(),
                creator_name: new.creator_name.clone(),
                creator_identifier: new.creator_identifier.clone(),
                reason: new.reason.clone(),
                timestamp: now,
                expire: new.expire,
            });
        }
        Ok(())
    }

    async fn delete_by_hash(&self, ban_hash: &str) -> RepoResult<u64> {
        let mut bans = self.bans.lock().unwrap();
        let before = bans.len();
        bans.retain(|b| b.ban_hash != ban_hash);
        Ok((before - bans.len()) as u64)
    }
}

#[async_trait]
impl WarningRepository for FakeDb {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Warning>> {
        Ok(self
            .warnings
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.id == id)
            .cloned())
    }

    async fn find_by_player(&self, player_id: i64) -> RepoResult<Vec<Warning>> {
        Ok(self
            .warnings
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|w| w.player_id == player_id)
            .cloned()
            .collect())
    }

    async fn count_by_player(&self, player_id: i64) -> RepoResult<i64> {
        Ok(self
            .warnings
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.player_id == player_id && w.counts_as_warning())
            .count() as i64)
    }

    async fn create(&self, new: &NewWarning) -> RepoResult<Warning> {
        let mut warnings = self.warnings.lock().unwrap();
        let now = Utc::now();
        let warning = Warning {
            id: warnings.iter().map(|w| w.id).max().unwrap_or(0) + 1,
            player_id: new.player_id,
            issuer_id: new.issuer_id,
            message: new.message.clone(),
            warning_type: new.warning_type,
            created_at: now,
            updated_at: now,
        };
        warnings.push(warning.clone());
        Ok(warning)
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let mut warnings = self.warnings.lock().unwrap();
        let before = warnings.len();
        warnings.retain(|w| w.id != id);
        Ok(warnings.len() < before)
    }
}

#[async_trait]
impl PanelLogRepository for FakeDb {
    async fn create(&self, new: &NewPanelLog) -> RepoResult<()> {
        let mut logs = self.panel_logs.lock().unwrap();
        let id = logs.len() as i64 + 1;
        logs.push(PanelLog {
            id,
            source_identifier: new.source_identifier.clone(),
            target_identifier: new.target_identifier.clone(),
            action: new.action.clone(),
            log: new.log.clone(),
            timestamp: Utc::now(),
        });
        Ok(())
    }

    async fn list(
        &self,
        target_identifier: Option<&str>,
        page: PageRequest,
    ) -> RepoResult<Vec<PanelLog>> {
        let rows: Vec<PanelLog> = self
            .panel_logs
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|log| target_identifier.map_or(true, |t| log.target_identifier == t))
            .cloned()
            .collect();
        Ok(page_slice(&rows, page))
    }
}

#[async_trait]
impl LogRepository for FakeDb {
    async fn search(&self, filter: &LogFilter, page: PageRequest) -> RepoResult<Vec<LogEntry>> {
        let mut rows: Vec<LogEntry> = self
            .logs
            .lock()
            .unwrap()
            .iter()
            .filter(|log| {
                filter.identifiers.is_empty() || filter.identifiers.contains(&log.identifier)
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        Ok(page_slice(&rows, page))
    }
}

/// Game servers answering from a preset table
#[derive(Default)]
pub struct FakeGameServers {
    lists: Mutex<HashMap<String, Option<Vec<ServerPlayer>>>>,
    fetches: AtomicUsize,
}

impl FakeGameServers {
    pub fn set_players(&self, server: &str, players: Vec<ServerPlayer>) {
        self.lists
            .lock()
            .unwrap()
            .insert(server.to_string(), Some(players));
    }

    pub fn set_failing(&self, server: &str) {
        self.lists.lock().unwrap().insert(server.to_string(), None);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GameServerClient for FakeGameServers {
    async fn fetch_players(&self, server: &str) -> Result<Vec<ServerPlayer>, GameServerError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match self.lists.lock().unwrap().get(server) {
            Some(Some(players)) => Ok(players.clone()),
            _ => Err(GameServerError::Status {
                server: server.to_string(),
                status: 503,
            }),
        }
    }
}

pub fn context(
    db: Arc<FakeDb>,
    servers: Arc<FakeGameServers>,
    server_addresses: Vec<String>,
    root_users: RootUsers,
) -> ServiceContext {
    ServiceContextBuilder::new()
        .player_repo(db.clone())
        .character_repo(db.clone())
        .ban_repo(db.clone())
        .warning_repo(db.clone())
        .panel_log_repo(db.clone())
        .log_repo(db)
        .cache(MemoryCache::shared())
        .game_server_client(servers)
        .jwt_service(Arc::new(JwtService::new(TEST_JWT_SECRET, 3600, 86_400)))
        .servers(server_addresses)
        .root_users(root_users)
        .build()
        .unwrap()
}

pub fn context_with_servers(servers: Arc<FakeGameServers>, addresses: Vec<String>) -> ServiceContext {
    context(Arc::new(FakeDb::default()), servers, addresses, RootUsers::default())
}

pub fn player(user_id: i64, steam: &str, name: &str) -> Player {
    Player::new(user_id, steam.to_string(), name.to_string())
}

pub fn character(character_id: i64, steam: &str, first: &str, last: &str) -> Character {
    Character {
        character_id,
        steam_identifier: steam.to_string(),
        character_slot: character_id as i32,
        gender: 0,
        first_name: first.to_string(),
        last_name: last.to_string(),
        date_of_birth: None,
        cash: 100,
        bank: 900,
        stocks_balance: 0,
        job_name: None,
        department_name: None,
        position_name: None,
        backstory: None,
        character_deleted: false,
        character_deletion_timestamp: None,
    }
}
