//! Request identity and presented credentials

use std::fmt;

use crate::error::DomainError;

/// A `(name, secret)` pair handed over by the transport layer.
///
/// The transport decides where the pair comes from (cookies, headers, form
/// fields); this crate only consumes the resolved values.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    name: String,
    secret: String,
}

impl Credentials {
    pub fn new(name: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            secret: secret.into(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Who is making a request.
///
/// `Anonymous` → `Authenticated` happens through registration or login;
/// `Authenticated` → `Anonymous` through logout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Identity {
    #[default]
    Anonymous,
    Authenticated { name: String },
}

impl Identity {
    /// Identity for a resolved user name
    pub fn authenticated(name: impl Into<String>) -> Self {
        Self::Authenticated { name: name.into() }
    }

    /// The user name, if authenticated
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { name } => Some(name),
        }
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// The user name, or `Unauthenticated` for anonymous callers
    pub fn require(&self) -> Result<&str, DomainError> {
        self.name().ok_or(DomainError::Unauthenticated)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => f.write_str("anonymous"),
            Self::Authenticated { name } => f.write_str(name),
        }
    }
}
