//! Ban entity - one row per banned identifier, grouped by `ban_hash`

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ban {
    pub id: i64,
    pub ban_hash: String,
    pub identifier: String,
    pub creator_name: Option<String>,
    pub creator_identifier: Option<String>,
    pub reason: Option<String>,
    pub timestamp: DateTime<Utc>,
    /// Duration in seconds, `None` for permanent bans
    pub expire: Option<i64>,
}

impl Ban {
    #[inline]
    pub fn is_permanent(&self) -> bool {
        self.expire.is_none()
    }

    /// When the ban runs out, if it is temporary
    ///
    /// Durations past the representable date range never run out.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expire
            .and_then(Duration::try_seconds)
            .and_then(|duration| self.timestamp.checked_add_signed(duration))
    }

    /// Whether the ban is still in effect at `now`
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().map_or(true, |expires_at| expires_at > now)
    }
}
