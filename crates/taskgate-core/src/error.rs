//! Unified application error types for TaskGate.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. The [`ErrorKind`] set is the
//! classification callers branch on; messages are for humans only.

use std::fmt;
use thiserror::Error;

/// Error classification used across the entire auth core.
///
/// Every kind except [`ErrorKind::AuthInfrastructureUnavailable`],
/// [`ErrorKind::Configuration`], [`ErrorKind::Serialization`] and
/// [`ErrorKind::Internal`] is a terminal, user-facing classification that
/// is never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Unknown login identifier or wrong password. Both collapse here.
    InvalidCredentials,
    /// A value required to mint a token was empty or absent.
    MissingRequiredField,
    /// The token is malformed, has a bad signature, the wrong type, or is
    /// not the currently stored refresh token.
    InvalidToken,
    /// The token is well-formed and signed but past its expiry.
    ExpiredToken,
    /// The token subject no longer resolves to an active member.
    MemberNotFound,
    /// The caller lacks the rank, project role, or ownership required.
    NoPermission,
    /// A proposed date window falls outside its bounding window.
    InvalidDateRange,
    /// The revocation store could not be reached.
    AuthInfrastructureUnavailable,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal error occurred.
    Internal,
}

impl ErrorKind {
    /// Stable machine-readable code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::ExpiredToken => "EXPIRED_TOKEN",
            Self::MemberNotFound => "MEMBER_NOT_FOUND",
            Self::NoPermission => "NO_PERMISSION",
            Self::InvalidDateRange => "INVALID_DATE_RANGE",
            Self::AuthInfrastructureUnavailable => "AUTH_INFRASTRUCTURE_UNAVAILABLE",
            Self::Configuration => "CONFIGURATION",
            Self::Serialization => "SERIALIZATION",
            Self::Internal => "INTERNAL",
        }
    }

    /// HTTP status an edge layer should answer with for this kind.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidCredentials | Self::InvalidToken | Self::ExpiredToken => 401,
            Self::NoPermission => 403,
            Self::MemberNotFound => 404,
            Self::MissingRequiredField | Self::InvalidDateRange => 400,
            Self::AuthInfrastructureUnavailable => 503,
            Self::Configuration | Self::Serialization | Self::Internal => 500,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The unified application error used throughout TaskGate.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Login failed. The message is fixed so that an unknown identifier
    /// and a wrong password look identical to the caller.
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorKind::InvalidCredentials, "Invalid identifier or password")
    }

    /// Create a missing-required-field error.
    pub fn missing_required_field(field: &str) -> Self {
        Self::new(
            ErrorKind::MissingRequiredField,
            format!("Required field '{field}' is missing"),
        )
    }

    /// Create an invalid-token error.
    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidToken, message)
    }

    /// Create an expired-token error.
    pub fn expired_token() -> Self {
        Self::new(ErrorKind::ExpiredToken, "Token has expired")
    }

    /// Create a member-not-found error.
    pub fn member_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MemberNotFound, message)
    }

    /// Permission denied. The message is fixed so that "no membership"
    /// and "insufficient role" look identical to the caller.
    pub fn no_permission() -> Self {
        Self::new(
            ErrorKind::NoPermission,
            "You do not have permission to perform this action",
        )
    }

    /// Create an invalid-date-range error.
    pub fn invalid_date_range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDateRange, message)
    }

    /// Create an infrastructure-unavailable error.
    pub fn infrastructure_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AuthInfrastructureUnavailable, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Whether the caller can recover by exchanging a refresh token.
    pub fn is_token_expired(&self) -> bool {
        self.kind == ErrorKind::ExpiredToken
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
