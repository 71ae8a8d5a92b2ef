//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::PostId;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Content cannot be empty")]
    EmptyContent,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User already exists: {0}")]
    DuplicateUser(String),

    // =========================================================================
    // Authentication Errors
    // =========================================================================
    /// Returned for both unknown names and wrong secrets.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Redirect-class: the caller should be sent to the login flow.
    #[error("Authentication required")]
    Unauthenticated,

    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage failure: {0}")]
    StorageFailure(String),
}

impl DomainError {
    /// Get an error code string for presentation layers
    pub fn code(&self) -> &'static str {
        match self {
            // Validation
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::EmptyContent => "EMPTY_CONTENT",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Conflict
            Self::DuplicateUser(_) => "DUPLICATE_USER",

            // Authentication
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Unauthenticated => "UNAUTHENTICATED",

            // Not Found
            Self::PostNotFound(_) => "UNKNOWN_POST",

            // Infrastructure
            Self::StorageFailure(_) => "STORAGE_FAILURE",
        }
    }

    /// Create a storage failure from any displayable error
    pub fn storage(err: impl std::fmt::Display) -> Self {
        Self::StorageFailure(err.to_string())
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PostNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_) | Self::EmptyContent | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateUser(_))
    }

    /// Check if this is an authentication error
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::InvalidCredentials | Self::Unauthenticated)
    }

    /// Check if the presentation layer should redirect to login instead of
    /// reporting a failure
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }

    /// Check if this error aborted the request because persistence failed
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StorageFailure(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::DuplicateUser("alice".to_string());
        assert_eq!(err.code(), "DUPLICATE_USER");

        let err = DomainError::PostNotFound(PostId::new("42"));
        assert_eq!(err.code(), "UNKNOWN_POST");

        assert_eq!(DomainError::Unauthenticated.code(), "UNAUTHENTICATED");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::PostNotFound(PostId::new("1")).is_not_found());
        assert!(!DomainError::EmptyContent.is_not_found());
    }

    #[test]
    fn test_only_unauthenticated_redirects() {
        assert!(DomainError::Unauthenticated.is_redirect());
        assert!(!DomainError::InvalidCredentials.is_redirect());
        assert!(!DomainError::storage("disk full").is_redirect());
    }

    #[test]
    fn test_classification() {
        assert!(DomainError::EmptyContent.is_validation());
        assert!(DomainError::InvalidInput("name".to_string()).is_validation());
        assert!(DomainError::DuplicateUser("bob".to_string()).is_conflict());
        assert!(DomainError::InvalidCredentials.is_authentication());
        assert!(DomainError::storage("io").is_storage());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::PostNotFound(PostId::new("123"));
        assert_eq!(err.to_string(), "Post not found: 123");

        let err = DomainError::ContentTooLong { max: 2000 };
        assert_eq!(err.to_string(), "Content too long: max 2000 characters");
    }
}
