//! Domain entities - core business objects

mod ban;
mod character;
mod log;
mod panel_log;
mod player;
mod vehicle;
mod warning;

pub use ban::Ban;
pub use character::Character;
pub use log::LogEntry;
pub use panel_log::PanelLog;
pub use player::{Player, DEFAULT_AVATAR_URL};
pub use vehicle::Vehicle;
pub use warning::{Warning, WarningType};
