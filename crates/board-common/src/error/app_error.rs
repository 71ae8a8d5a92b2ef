//! Application error types
//!
//! Errors raised outside the domain rules: configuration, credential hashing,
//! and unexpected internal failures. Domain errors pass through unchanged.

use board_core::DomainError;
use serde::Serialize;
use std::fmt;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Credential hashing failed: {0}")]
    Hashing(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// Status code a presentation layer should use for this error.
    ///
    /// Unauthenticated requests map to `303 See Other` (login redirect)
    /// rather than a hard failure.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Config(_) | Self::Hashing(_) | Self::Internal(_) => 500,
            Self::Domain(e) => domain_status_code(e),
        }
    }

    /// Stable error code for presentation layers
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Hashing(_) | Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if the caller should be redirected to the login flow
    #[must_use]
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_redirect())
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code())
    }

    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Status code for a domain error, shared with the service layer
#[must_use]
pub fn domain_status_code(e: &DomainError) -> u16 {
    if e.is_redirect() {
        303
    } else if e.is_not_found() {
        404
    } else if e.is_validation() {
        400
    } else if e.is_authentication() {
        401
    } else if e.is_conflict() {
        409
    } else {
        500
    }
}

/// Error body for presentation layers
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        let details = match err {
            AppError::Domain(DomainError::ContentTooLong { max }) => {
                Some(serde_json::json!({ "max": max }))
            }
            _ => None,
        };
        Self {
            code: err.error_code().to_string(),
            message: err.to_string(),
            details,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
