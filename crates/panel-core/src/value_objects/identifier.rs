//! Typed player identifiers (`<kind>:<value>`)

use std::fmt;

/// Identifier kinds reported by the game servers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    Ip,
    Steam,
    Discord,
    Fivem,
    License,
    License2,
    Live,
    Xbl,
}

impl IdentifierKind {
    /// Parse the kind prefix of an identifier
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "ip" => Some(Self::Ip),
            "steam" => Some(Self::Steam),
            "discord" => Some(Self::Discord),
            "fivem" => Some(Self::Fivem),
            "license" => Some(Self::License),
            "license2" => Some(Self::License2),
            "live" => Some(Self::Live),
            "xbl" => Some(Self::Xbl),
            _ => None,
        }
    }

    /// Human readable label shown next to the identifier
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ip => "IP-Address",
            Self::Steam => "Steam Account",
            Self::Discord => "Discord Account",
            Self::Fivem => "FiveM Account",
            Self::License | Self::License2 => "Rockstar Account",
            Self::Live => "Microsoft Account",
            Self::Xbl => "XBox Live",
        }
    }

    /// Whether identifiers of this kind may be banned
    pub fn is_bannable(&self) -> bool {
        !matches!(self, Self::Ip)
    }
}

/// A parsed identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    kind: IdentifierKind,
    value: String,
}

/// Error when parsing an identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierParseError {
    #[error("identifier must have the form <kind>:<value>")]
    Malformed,

    #[error("unknown identifier kind: {0}")]
    UnknownKind(String),
}

impl Identifier {
    /// Parse `<kind>:<value>`; exactly one `:` is allowed
    pub fn parse(s: &str) -> Result<Self, IdentifierParseError> {
        let mut parts = s.split(':');
        let (Some(prefix), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(IdentifierParseError::Malformed);
        };

        let kind = IdentifierKind::from_prefix(prefix)
            .ok_or_else(|| IdentifierParseError::UnknownKind(prefix.to_string()))?;

        Ok(Self {
            kind,
            value: value.to_string(),
        })
    }

    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// Label for a raw identifier string, based on its kind prefix only
    pub fn label_for(identifier: &str) -> Option<&'static str> {
        let prefix = identifier.split(':').next().unwrap_or_default();
        IdentifierKind::from_prefix(prefix).map(|kind| kind.label())
    }

    /// Whether a raw string is a well formed identifier of a known kind
    pub fn is_valid(identifier: &str) -> bool {
        identifier.split(':').count() == 2 && Self::label_for(identifier).is_some()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            IdentifierKind::Ip => "ip",
            IdentifierKind::Steam => "steam",
            IdentifierKind::Discord => "discord",
            IdentifierKind::Fivem => "fivem",
            IdentifierKind::License => "license",
            IdentifierKind::License2 => "license2",
            IdentifierKind::Live => "live",
            IdentifierKind::Xbl => "xbl",
        };
        write!(f, "{prefix}:{}", self.value)
    }
}
