//! User entity - represents a registered board member

use std::fmt;

/// Registered user.
///
/// `password` holds whatever the credential policy stored at registration:
/// either the cleartext secret or an Argon2 PHC hash string.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub password: String,
}

impl User {
    /// Create a new User with required fields
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive name comparison
    #[inline]
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}
