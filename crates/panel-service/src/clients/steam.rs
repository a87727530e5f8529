//! Steam Web API player summaries

use async_trait::async_trait;
use panel_cache::SteamProfile;
use serde::Deserialize;

const PLAYER_SUMMARIES_URL: &str =
    "https://api.steampowered.com/ISteamUser/GetPlayerSummaries/v2/";

#[derive(Debug, thiserror::Error)]
pub enum SteamClientError {
    #[error("Steam Web API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Steam Web API responded with status {0}")]
    Status(u16),
}

/// Lookup of public Steam profiles
#[async_trait]
pub trait SteamClient: Send + Sync {
    /// Summary for a 64-bit SteamID, `None` if Steam does not know the account
    async fn player_summary(&self, steam64: u64) -> Result<Option<SteamProfile>, SteamClientError>;
}

#[derive(Debug, Deserialize)]
struct SummariesEnvelope {
    response: SummariesBody,
}

#[derive(Debug, Deserialize)]
struct SummariesBody {
    #[serde(default)]
    players: Vec<PlayerSummary>,
}

#[derive(Debug, Deserialize)]
struct PlayerSummary {
    steamid: String,
    personaname: String,
    #[serde(default)]
    profileurl: String,
    avatarfull: Option<String>,
}

impl From<PlayerSummary> for SteamProfile {
    fn from(summary: PlayerSummary) -> Self {
        let mut profile = SteamProfile::new(summary.steamid, summary.personaname);
        profile.profile_url = summary.profileurl;
        profile.avatar = summary.avatarfull;
        profile
    }
}

#[derive(Debug, Clone)]
pub struct HttpSteamClient {
    http_client: reqwest::Client,
    api_key: String,
}

impl HttpSteamClient {
    pub fn new(http_client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl SteamClient for HttpSteamClient {
    async fn player_summary(&self, steam64: u64) -> Result<Option<SteamProfile>, SteamClientError> {
        let steam_id = steam64.to_string();
        let response = self
            .http_client
            .get(PLAYER_SUMMARIES_URL)
            .query(&[("key", self.api_key.as_str()), ("steamids", steam_id.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SteamClientError::Status(status.as_u16()));
        }

        let envelope = response.json::<SummariesEnvelope>().await?;
        Ok(envelope
            .response
            .players
            .into_iter()
            .next()
            .map(SteamProfile::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_envelope() {
        let envelope: SummariesEnvelope = serde_json::from_str(
            r#"{"response":{"players":[{
                "steamid":"76561198265685624",
                "personaname":"Tester",
                "profileurl":"https://steamcommunity.com/id/tester/",
                "avatarfull":"https://avatars.example/full.jpg"
            }]}}"#,
        )
        .unwrap();

        let profile: SteamProfile = envelope
            .response
            .players
            .into_iter()
            .next()
            .map(SteamProfile::from)
            .unwrap();
        assert_eq!(profile.persona_name, "Tester");
        assert_eq!(profile.avatar.as_deref(), Some("https://avatars.example/full.jpg"));
    }

    #[test]
    fn test_unknown_account_has_no_players() {
        let envelope: SummariesEnvelope =
            serde_json::from_str(r#"{"response":{"players":[]}}"#).unwrap();
        assert!(envelope.response.players.is_empty());
    }
}
