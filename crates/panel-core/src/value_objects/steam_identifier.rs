//! Steam identifier - the `steam:<hex>` identity string game servers report
//!
//! The hex body is the 64-bit SteamID. Identifiers starting with
//! `steam:1100002` are masked aliases of a real `steam:1100001` account.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Prefix shared by every steam identifier
pub const STEAM_PREFIX: &str = "steam:";

/// Prefix of masked (fake identity) steam identifiers
pub const MASKED_PREFIX: &str = "steam:1100002";

/// Prefix of real steam identifiers
pub const REAL_PREFIX: &str = "steam:1100001";

/// Base URL used for Steam's short invite links
pub const STEAM_INVITE_URL: &str = "http://s.team/p/";

const INVITE_ALPHABET: &[u8; 16] = b"bcdfghjkmnpqrtvw";
const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A validated steam identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SteamIdentifier {
    raw: String,
    steam64: u64,
}

/// Error when parsing a steam identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SteamIdentifierError {
    #[error("steam identifier must start with 'steam:'")]
    MissingPrefix,

    #[error("steam identifier has an invalid hex body: {0}")]
    InvalidHex(String),
}

impl SteamIdentifier {
    /// Parse a `steam:<hex>` identifier
    pub fn parse(s: &str) -> Result<Self, SteamIdentifierError> {
        let body = s
            .strip_prefix(STEAM_PREFIX)
            .ok_or(SteamIdentifierError::MissingPrefix)?;

        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SteamIdentifierError::InvalidHex(body.to_string()));
        }

        let steam64 = u64::from_str_radix(body, 16)
            .map_err(|_| SteamIdentifierError::InvalidHex(body.to_string()))?;

        Ok(Self {
            raw: format!("{STEAM_PREFIX}{}", body.to_ascii_lowercase()),
            steam64,
        })
    }

    /// The identifier as stored in the database
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// 64-bit SteamID
    #[inline]
    pub fn steam64(&self) -> u64 {
        self.steam64
    }

    /// Account ID (low 32 bits of the SteamID)
    #[inline]
    pub fn account_id(&self) -> u32 {
        (self.steam64 & 0xFFFF_FFFF) as u32
    }

    /// Base-36 rendering of the SteamID, used as a short handle in the panel
    pub fn steam36(&self) -> String {
        let mut value = self.steam64;
        if value == 0 {
            return "0".to_string();
        }

        let mut digits = Vec::new();
        while value > 0 {
            digits.push(BASE36_ALPHABET[(value % 36) as usize]);
            value /= 36;
        }
        digits.reverse();

        String::from_utf8(digits).unwrap_or_default()
    }

    /// Steam invite code for the account (the `s.team/p/` short link code)
    pub fn invite_code(&self) -> String {
        let hex = format!("{:x}", self.account_id());
        let mapped: String = hex
            .bytes()
            .map(|b| {
                let index = (b as char).to_digit(16).unwrap_or(0) as usize;
                INVITE_ALPHABET[index] as char
            })
            .collect();

        if mapped.len() > 3 {
            let (head, tail) = mapped.split_at(mapped.len() / 2);
            format!("{head}-{tail}")
        } else {
            mapped
        }
    }

    /// Short link to the player's Steam profile
    pub fn profile_url(&self) -> String {
        format!("{STEAM_INVITE_URL}{}", self.invite_code())
    }

    /// Whether this is a masked alias (`steam:1100002…`)
    #[inline]
    pub fn is_masked(&self) -> bool {
        self.raw.starts_with(MASKED_PREFIX)
    }

    /// The real identifier behind a masked alias; identity for real identifiers
    pub fn unmasked(&self) -> Self {
        if !self.is_masked() {
            return self.clone();
        }

        let real = self.raw.replacen(MASKED_PREFIX, REAL_PREFIX, 1);
        Self::parse(&real).unwrap_or_else(|_| self.clone())
    }
}

impl fmt::Display for SteamIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for SteamIdentifier {
    type Err = SteamIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for SteamIdentifier {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl Serialize for SteamIdentifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for SteamIdentifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
