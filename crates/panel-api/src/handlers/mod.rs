//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod bans;
pub mod characters;
pub mod health;
pub mod logs;
pub mod panel_logs;
pub mod players;
pub mod servers;
pub mod warnings;
