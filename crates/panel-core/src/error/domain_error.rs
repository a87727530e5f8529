//! Domain errors - moderation rule violations and wrapped storage failures

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Warning not found: {0}")]
    WarningNotFound(i64),

    #[error("Not a staff member")]
    NotStaff,

    #[error("Not the issuer of this warning")]
    NotWarningIssuer,

    #[error("Player is already banned")]
    AlreadyBanned,

    // Infrastructure (wrapped)
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}

impl DomainError {
    /// Error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::WarningNotFound(_) => "UNKNOWN_WARNING",
            Self::NotStaff => "NOT_STAFF",
            Self::NotWarningIssuer => "NOT_WARNING_ISSUER",
            Self::AlreadyBanned => "ALREADY_BANNED",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
        }
    }

    /// HTTP status this error surfaces as
    pub fn status_code(&self) -> u16 {
        match self {
            Self::WarningNotFound(_) => 404,
            Self::NotStaff | Self::NotWarningIssuer => 403,
            Self::AlreadyBanned => 409,
            Self::DatabaseError(_) | Self::CacheError(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DomainError::WarningNotFound(3).code(), "UNKNOWN_WARNING");
        assert_eq!(DomainError::AlreadyBanned.code(), "ALREADY_BANNED");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(DomainError::WarningNotFound(1).status_code(), 404);
        assert_eq!(DomainError::NotStaff.status_code(), 403);
        assert_eq!(DomainError::NotWarningIssuer.status_code(), 403);
        assert_eq!(DomainError::AlreadyBanned.status_code(), 409);
        assert_eq!(DomainError::CacheError("redis".into()).status_code(), 500);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::WarningNotFound(42).to_string(),
            "Warning not found: 42"
        );
    }
}
