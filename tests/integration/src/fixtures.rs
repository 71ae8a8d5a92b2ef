//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use board_core::Credentials;
use board_service::dto::{LoginRequest, RegisterRequest};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A name/password pair that no other test uses
#[derive(Debug, Clone)]
pub struct Account {
    pub name: String,
    pub password: String,
}

impl Account {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("user{suffix}"),
            password: format!("secret-{suffix}"),
        }
    }

    pub fn new(name: &str, password: &str) -> Self {
        Self {
            name: name.to_string(),
            password: password.to_string(),
        }
    }

    pub fn register_request(&self) -> RegisterRequest {
        RegisterRequest::new(&self.name, &self.password)
    }

    pub fn login_request(&self) -> LoginRequest {
        LoginRequest::new(&self.name, &self.password)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.name, &self.password)
    }
}
