//! Database models - SQLx-compatible structs for PostgreSQL tables

mod ban;
mod character;
mod log;
mod panel_log;
mod player;
mod warning;

pub use ban::BanModel;
pub use character::{CharacterModel, VehicleModel};
pub use log::LogModel;
pub use panel_log::PanelLogModel;
pub use player::{PlayerModel, PlayerNameModel};
pub use warning::WarningModel;
