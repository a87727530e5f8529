//! # panel-db
//!
//! Database layer implementing the panel-core repository traits with PostgreSQL via SQLx.
//!
//! ```rust,ignore
//! use panel_db::{create_pool, DatabaseConfig, PgPlayerRepository};
//! use panel_core::traits::PlayerRepository;
//!
//! let pool = create_pool(&DatabaseConfig::default()).await?;
//! let players = PgPlayerRepository::new(pool);
//! let player = players.find_by_steam("steam:11000010a1b2c3d").await?;
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod query;
pub mod repositories;

pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use query::build_log_query;
pub use repositories::{
    PgBanRepository, PgCharacterRepository, PgLogRepository, PgPanelLogRepository,
    PgPlayerRepository, PgWarningRepository,
};
