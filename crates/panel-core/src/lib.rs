//! # panel-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Ban, Character, LogEntry, PanelLog, Player, Vehicle, Warning, WarningType,
    DEFAULT_AVATAR_URL,
};
pub use error::DomainError;
pub use traits::{
    BanRepository, CharacterRepository, LogFilter, LogRepository, NewBan, NewPanelLog,
    NewWarning, PageRequest, PanelLogRepository, PlayerRepository, PlayerSearch, RepoResult,
    TextMatch, WarningRepository, LOG_PAGE_SIZE,
};
pub use value_objects::{
    server_name, Identifier, IdentifierKind, IdentifierParseError, OnlinePlayer, OnlinePlayers,
    OnlineState, PlayerRoles, PlayerStatus, RootUsers, ServerPlayer, SteamIdentifier,
    SteamIdentifierError, StoredRoleFlags,
};
