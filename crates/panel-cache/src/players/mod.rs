//! Player data caches

mod masked_profile;
mod player_names;

pub use masked_profile::{MaskedProfileStore, MASKED_PROFILE_TTL};
pub use player_names::PlayerNameStore;
