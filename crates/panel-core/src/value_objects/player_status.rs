//! Online status of a player across the tracked game servers

use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Coarse online state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnlineState {
    Online,
    Offline,
    /// Player lists could not be fetched, or no servers are configured
    Unavailable,
}

/// Online status with the server details of an online player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatus {
    pub status: OnlineState,
    pub server_ip: String,
    pub server_id: u32,
    pub server_name: String,
    pub character: i64,
    pub fake_name: Option<String>,
}

impl PlayerStatus {
    pub fn online(
        server_ip: impl Into<String>,
        server_id: u32,
        character: i64,
        fake_name: Option<String>,
    ) -> Self {
        let server_ip = server_ip.into();
        Self {
            status: OnlineState::Online,
            server_name: server_name(&server_ip),
            server_ip,
            server_id,
            character,
            fake_name,
        }
    }

    pub fn offline() -> Self {
        Self::empty(OnlineState::Offline)
    }

    pub fn unavailable() -> Self {
        Self::empty(OnlineState::Unavailable)
    }

    fn empty(status: OnlineState) -> Self {
        Self {
            status,
            server_ip: String::new(),
            server_id: 0,
            server_name: String::new(),
            character: 0,
            fake_name: None,
        }
    }

    #[inline]
    pub fn is_online(&self) -> bool {
        self.status == OnlineState::Online
    }

    /// Mark the status offline, keeping the last known server
    pub fn set_offline(&mut self) {
        self.status = OnlineState::Offline;
        self.character = 0;
    }
}

/// Display name of a server address
///
/// Hostnames are shortened to their first DNS label
/// (`c3s1.op-framework.com:30120` becomes `c3s1`). IP addresses are returned
/// as configured, without the scheme.
pub fn server_name(address: &str) -> String {
    let without_scheme = address
        .split_once("://")
        .map_or(address, |(_, rest)| rest);
    let authority = without_scheme.split('/').next().unwrap_or_default();

    let host = match authority.rsplit_once(':') {
        Some((host, port)) if port.bytes().all(|b| b.is_ascii_digit()) => host,
        _ => authority,
    };
    let host = host.trim_start_matches('[').trim_end_matches(']');

    if host.parse::<IpAddr>().is_ok() {
        return authority.to_string();
    }

    host.split('.').next().unwrap_or(host).to_string()
}
