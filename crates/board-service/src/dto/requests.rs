//! Request DTOs
//!
//! Requests that create state implement `Validate` with upper bounds only.
//! Emptiness is a domain rule checked by the services. Login carries no caps
//! so accounts registered before the limits existed can still sign in.

use std::fmt;

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use board_core::DomainError;

// ============================================================================
// Account Requests
// ============================================================================

/// Registration form
#[derive(Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(max = 64, message = "Name must be at most 64 characters"))]
    pub name: String,

    #[validate(length(max = 128, message = "Password must be at most 128 characters"))]
    pub password: String,
}

impl RegisterRequest {
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Login form
#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// Content Requests
// ============================================================================

/// New post form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(max = 10_000))]
    pub text: String,
}

impl CreatePostRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// New comment form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddCommentRequest {
    #[serde(alias = "postId")]
    pub post_id: String,

    #[validate(length(max = 2_000))]
    pub text: String,
}

impl AddCommentRequest {
    pub fn new(post_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            post_id: post_id.into(),
            text: text.into(),
        }
    }
}

/// Translate validation failures into the domain error a caller sees.
///
/// An over-long `text` field is `ContentTooLong`; anything else is
/// `InvalidInput` carrying the first message.
pub fn rejection(errors: &ValidationErrors) -> DomainError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let Some((field, errs)) = fields.into_iter().next() else {
        return DomainError::InvalidInput(errors.to_string());
    };
    let first = errs.first();

    let text_max = first
        .filter(|_| field == "text")
        .and_then(|e| e.params.get("max"))
        .and_then(|max| max.as_u64());
    if let Some(max) = text_max {
        return DomainError::ContentTooLong { max: max as usize };
    }

    let message = first
        .and_then(|e| e.message.as_ref())
        .map_or_else(|| format!("{field} is invalid"), ToString::to_string);
    DomainError::InvalidInput(message)
}
