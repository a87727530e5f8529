//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in panel-core.

mod ban;
mod character;
mod error;
mod log;
mod panel_log;
mod player;
mod warning;

pub use ban::PgBanRepository;
pub use character::PgCharacterRepository;
pub use log::PgLogRepository;
pub use panel_log::PgPanelLogRepository;
pub use player::PgPlayerRepository;
pub use warning::PgWarningRepository;
