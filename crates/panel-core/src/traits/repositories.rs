//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    Ban, Character, LogEntry, PanelLog, Player, Vehicle, Warning, WarningType,
};
use crate::error::DomainError;
use crate::traits::query::{LogFilter, PageRequest, PlayerSearch};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Player Repository
// ============================================================================

#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Find player by user ID
    async fn find_by_id(&self, user_id: i64) -> RepoResult<Option<Player>>;

    /// Find player by steam identifier
    async fn find_by_steam(&self, steam_identifier: &str) -> RepoResult<Option<Player>>;

    /// Search players by name (case-insensitive) or steam identifier (exact),
    /// ordered by user ID
    async fn search(&self, search: &PlayerSearch, page: PageRequest) -> RepoResult<Vec<Player>>;

    /// Names of the given steam identifiers, as `(steam_identifier, name)`
    async fn find_names(&self, steam_identifiers: &[String]) -> RepoResult<Vec<(String, String)>>;
}

// ============================================================================
// Character Repository
// ============================================================================

#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Find character by ID
    async fn find_by_id(&self, character_id: i64) -> RepoResult<Option<Character>>;

    /// Characters of a player, ordered by slot
    async fn find_by_steam(&self, steam_identifier: &str) -> RepoResult<Vec<Character>>;

    /// Search characters by name or steam identifier
    async fn search(&self, query: Option<&str>, page: PageRequest) -> RepoResult<Vec<Character>>;

    /// Vehicles owned by a character
    async fn find_vehicles(&self, character_id: i64) -> RepoResult<Vec<Vehicle>>;
}

// ============================================================================
// Ban Repository
// ============================================================================

/// A ban row to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBan {
    pub ban_hash: String,
    pub identifier: String,
    pub creator_name: Option<String>,
    pub creator_identifier: Option<String>,
    pub reason: Option<String>,
    pub expire: Option<i64>,
}

#[async_trait]
pub trait BanRepository: Send + Sync {
    /// All ban rows matching any of the identifiers
    async fn find_by_identifiers(&self, identifiers: &[String]) -> RepoResult<Vec<Ban>>;

    /// All rows of a ban
    async fn find_by_hash(&self, ban_hash: &str) -> RepoResult<Vec<Ban>>;

    /// One row per ban, newest first
    async fn list(&self, page: PageRequest) -> RepoResult<Vec<Ban>>;

    /// Insert the rows of a ban atomically
    async fn create_many(&self, bans: &[NewBan]) -> RepoResult<()>;

    /// Delete all rows of a ban, returning the number of deleted rows
    async fn delete_by_hash(&self, ban_hash: &str) -> RepoResult<u64>;
}

// ============================================================================
// Warning Repository
// ============================================================================

/// A warning to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWarning {
    pub player_id: i64,
    pub issuer_id: i64,
    pub message: String,
    pub warning_type: WarningType,
}

#[async_trait]
pub trait WarningRepository: Send + Sync {
    /// Find warning by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Warning>>;

    /// Warnings of a player, newest first
    async fn find_by_player(&self, player_id: i64) -> RepoResult<Vec<Warning>>;

    /// Number of warnings (not notes) of a player
    async fn count_by_player(&self, player_id: i64) -> RepoResult<i64>;

    /// Create a warning
    async fn create(&self, warning: &NewWarning) -> RepoResult<Warning>;

    /// Delete a warning, returning whether it existed
    async fn delete(&self, id: i64) -> RepoResult<bool>;
}

// ============================================================================
// Panel Log Repository
// ============================================================================

/// A panel log entry to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPanelLog {
    pub source_identifier: String,
    pub target_identifier: String,
    pub action: String,
    pub log: String,
}

#[async_trait]
pub trait PanelLogRepository: Send + Sync {
    /// Record a staff action
    async fn create(&self, log: &NewPanelLog) -> RepoResult<()>;

    /// Panel logs, newest first, optionally only those targeting one identifier
    async fn list(&self, target_identifier: Option<&str>, page: PageRequest)
        -> RepoResult<Vec<PanelLog>>;
}

// ============================================================================
// Log Repository
// ============================================================================

#[async_trait]
pub trait LogRepository: Send + Sync {
    /// Filtered log entries, newest first
    async fn search(&self, filter: &LogFilter, page: PageRequest) -> RepoResult<Vec<LogEntry>>;
}
