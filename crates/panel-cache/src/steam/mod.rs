//! Steam Web API caches

mod steam_profile;

pub use steam_profile::{SteamProfile, SteamProfileStore};
