//! Request DTOs for API endpoints
//!
//! Bodies implement `Deserialize` and `Validate`; query strings only `Deserialize`.

use serde::{Deserialize, Deserializer};
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// Moderation Requests
// ============================================================================

/// Longest temporary ban, 100 years
pub const MAX_BAN_SECONDS: i64 = 100 * 365 * 86_400;

/// Ban all bannable identifiers of a player
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IssueBanRequest {
    #[validate(length(max = 1000, message = "Reason must be at most 1000 characters"))]
    pub reason: Option<String>,

    /// Duration in seconds; omitted for a permanent ban
    #[validate(range(
        min = 1,
        max = MAX_BAN_SECONDS,
        message = "Ban duration must be between 1 second and 100 years"
    ))]
    pub expire: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWarningRequest {
    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub message: String,

    /// `warning` (default) or `note`
    pub warning_type: Option<String>,
}

// ============================================================================
// Query Strings
// ============================================================================

/// `?query=` for player and character search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
}

/// `?identifier=` for panel logs
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PanelLogQuery {
    pub identifier: Option<String>,
}

/// Raw log listing filters, echoed back in the response
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, serde::Serialize)]
pub struct LogQuery {
    pub identifier: Option<String>,
    pub before: Option<String>,
    pub after: Option<String>,
    pub server: Option<String>,
    pub action: Option<String>,
    pub details: Option<String>,
    #[serde(default, skip_serializing, deserialize_with = "lenient_page")]
    pub page: Option<u32>,
}

// Unparsable pages fall back to the first page
fn lenient_page<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| raw.trim().parse().ok()))
}

/// `?fresh=true` bypasses the server player list cache
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct StatusQuery {
    #[serde(default)]
    pub fresh: bool,
}
