//! Mint a staff session token pair
//!
//! ```bash
//! cargo run -p panel-api --bin panel-token -- steam:11000010a1b2c3d
//! ```
//!
//! Uses the same `JWT_*` settings as the API server. The API still checks that
//! the player is staff on every request.

use panel_common::{AppConfig, JwtService};
use panel_core::SteamIdentifier;

fn main() -> anyhow::Result<()> {
    let Some(raw) = std::env::args().nth(1) else {
        anyhow::bail!("usage: panel-token <steam identifier>");
    };

    let steam = SteamIdentifier::parse(raw.trim())
        .map_err(|e| anyhow::anyhow!("invalid steam identifier {raw}: {e}"))?;

    let config = AppConfig::from_env()?;
    let jwt = JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    );

    let pair = jwt.issue(&steam)?;
    println!("{}", serde_json::to_string_pretty(&pair)?);

    Ok(())
}
