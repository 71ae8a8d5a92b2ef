//! Credential hashing and verification
//!
//! Uses Argon2id for stored secrets. Documents written by older deployments
//! hold cleartext secrets, so verification accepts both forms: a stored value
//! that parses as an Argon2 PHC string is verified with Argon2, anything else
//! is compared for exact equality.

use std::str::FromStr;
use std::sync::OnceLock;

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use serde::Deserialize;

use crate::error::AppError;

/// How newly registered secrets are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CredentialMode {
    /// Argon2id PHC hash
    #[default]
    Hashed,
    /// Cleartext, byte-identical to the submitted secret
    Plaintext,
}

impl CredentialMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hashed => "hashed",
            Self::Plaintext => "plaintext",
        }
    }
}

impl FromStr for CredentialMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hashed" | "argon2" => Ok(Self::Hashed),
            "plaintext" | "cleartext" => Ok(Self::Plaintext),
            other => Err(format!("expected hashed|plaintext, got `{other}`")),
        }
    }
}

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Hashing(e.to_string()))
}

/// Verify a password against an Argon2 hash
///
/// # Errors
/// Returns an error if the hash is not a valid PHC string
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Hashing(format!("invalid hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Check whether a stored secret is an Argon2 PHC string
pub fn is_password_hash(stored: &str) -> bool {
    stored.starts_with("$argon2") && PasswordHash::new(stored).is_ok()
}

/// Hash used to burn comparable time when the user name is unknown
fn dummy_hash() -> Option<&'static str> {
    static DUMMY: OnceLock<Option<String>> = OnceLock::new();
    DUMMY
        .get_or_init(|| hash_password("board-dummy-secret").ok())
        .as_deref()
}

/// Storage and verification policy for user secrets
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialPolicy {
    mode: CredentialMode,
}

impl CredentialPolicy {
    #[must_use]
    pub fn new(mode: CredentialMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub fn mode(&self) -> CredentialMode {
        self.mode
    }

    /// Produce the value to persist for a newly registered secret
    ///
    /// # Errors
    /// Returns an error if hashing fails
    pub fn seal(&self, secret: &str) -> Result<String, AppError> {
        match self.mode {
            CredentialMode::Hashed => hash_password(secret),
            CredentialMode::Plaintext => Ok(secret.to_string()),
        }
    }

    /// Check a presented secret against a stored value of either form
    ///
    /// In plaintext mode an exact match is accepted before the stored value
    /// is considered as a hash, since that mode may have stored a secret that
    /// itself looks like a PHC string.
    ///
    /// # Errors
    /// Returns an error if a stored hash is malformed
    pub fn verify(&self, presented: &str, stored: &str) -> Result<bool, AppError> {
        if self.mode == CredentialMode::Plaintext && presented == stored {
            return Ok(true);
        }
        if is_password_hash(stored) {
            verify_password(presented, stored)
        } else {
            Ok(presented == stored)
        }
    }

    /// Spend roughly the cost of a real verification for an unknown user, so
    /// that a miss on the name is not observably faster than a wrong secret
    pub fn verify_unknown(&self, presented: &str) {
        if self.mode == CredentialMode::Hashed {
            if let Some(hash) = dummy_hash() {
                let _ = verify_password(presented, hash);
            }
        }
    }
}
