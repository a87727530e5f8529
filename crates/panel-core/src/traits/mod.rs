//! Repository traits and the query types they accept

mod query;
mod repositories;

pub use query::{split_values, LogFilter, PageRequest, PlayerSearch, TextMatch, LOG_PAGE_SIZE};
pub use repositories::{
    BanRepository, CharacterRepository, LogRepository, NewBan, NewPanelLog, NewWarning,
    PanelLogRepository, PlayerRepository, RepoResult, WarningRepository,
};
