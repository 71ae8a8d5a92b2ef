//! Credential storage and verification

mod password;

pub use password::{hash_password, is_password_hash, verify_password, CredentialMode, CredentialPolicy};
