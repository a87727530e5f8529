//! Warning entity - staff warnings and notes on a player

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Kind of a warning entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WarningType {
    #[default]
    Warning,
    Note,
}

impl WarningType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Note => "note",
        }
    }
}

impl fmt::Display for WarningType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WarningType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "warning" => Ok(Self::Warning),
            "note" => Ok(Self::Note),
            other => Err(format!("unknown warning type: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub id: i64,
    pub player_id: i64,
    pub issuer_id: i64,
    pub message: String,
    pub warning_type: WarningType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Warning {
    /// Whether `user_id` issued this warning
    #[inline]
    pub fn is_issued_by(&self, user_id: i64) -> bool {
        self.issuer_id == user_id
    }

    /// Notes are not counted as warnings
    #[inline]
    pub fn counts_as_warning(&self) -> bool {
        self.warning_type == WarningType::Warning
    }
}
