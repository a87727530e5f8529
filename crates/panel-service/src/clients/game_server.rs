//! HTTP client for the game servers' player list endpoint

use async_trait::async_trait;
use panel_core::ServerPlayer;
use serde::Deserialize;
use std::time::Duration;

/// Error fetching a server's player list
#[derive(Debug, thiserror::Error)]
pub enum GameServerError {
    #[error("Request to {server} failed: {source}")]
    Request {
        server: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{server} responded with status {status}")]
    Status { server: String, status: u16 },
}

/// Source of per-server player lists
#[async_trait]
pub trait GameServerClient: Send + Sync {
    async fn fetch_players(&self, server: &str) -> Result<Vec<ServerPlayer>, GameServerError>;
}

/// Player list payload; servers either wrap the list in `data` or send it bare
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PlayerListPayload {
    Wrapped { data: Vec<ServerPlayer> },
    Bare(Vec<ServerPlayer>),
}

impl PlayerListPayload {
    fn into_players(self) -> Vec<ServerPlayer> {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

/// [`GameServerClient`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpGameServerClient {
    http_client: reqwest::Client,
    player_path: String,
    timeout: Duration,
}

impl HttpGameServerClient {
    pub fn new(http_client: reqwest::Client, player_path: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http_client,
            player_path: player_path.into(),
            timeout,
        }
    }

    pub fn from_config(http_client: reqwest::Client, config: &panel_common::ServersConfig) -> Self {
        Self::new(
            http_client,
            config.player_path.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Full URL of a server's player list
    pub fn player_list_url(&self, server: &str) -> String {
        let base = server.trim_end_matches('/');
        let path = self.player_path.trim_start_matches('/');

        if base.starts_with("http://") || base.starts_with("https://") {
            format!("{base}/{path}")
        } else {
            format!("http://{base}/{path}")
        }
    }
}

#[async_trait]
impl GameServerClient for HttpGameServerClient {
    async fn fetch_players(&self, server: &str) -> Result<Vec<ServerPlayer>, GameServerError> {
        let url = self.player_list_url(server);
        let request_error = |source: reqwest::Error| GameServerError::Request {
            server: server.to_string(),
            source,
        };

        let response = self
            .http_client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GameServerError::Status {
                server: server.to_string(),
                status: status.as_u16(),
            });
        }

        let payload = response
            .json::<PlayerListPayload>()
            .await
            .map_err(request_error)?;

        Ok(payload.into_players())
    }
}
