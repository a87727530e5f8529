//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a
//! request.

pub mod auth;
pub mod bans;
pub mod characters;
pub mod context;
pub mod error;
pub mod logs;
pub mod names;
pub mod panel_logs;
pub mod player;
pub mod status;
pub mod warnings;

pub use auth::AuthService;
pub use bans::BanService;
pub use characters::CharacterService;
pub use context::{CacheTtls, ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use logs::LogService;
pub use names::NameService;
pub use panel_logs::PanelLogService;
pub use player::{PlayerService, ResolvedPlayer};
pub use status::StatusService;
pub use warnings::WarningService;
