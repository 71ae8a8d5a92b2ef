//! User service
//!
//! Handles registration and login.

use board_core::entities::User;
use board_core::{DomainError, Identity};
use tracing::{info, instrument, warn};

use super::auth_gate::AuthGate;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user and return the caller's new identity.
    ///
    /// The name is stored exactly as given; only emptiness is checked after
    /// trimming.
    #[instrument(skip(self, name, password), fields(name = %name))]
    pub async fn register(&self, name: &str, password: &str) -> ServiceResult<Identity> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidInput("name must not be empty".to_string()).into());
        }
        if password.trim().is_empty() {
            return Err(
                DomainError::InvalidInput("password must not be empty".to_string()).into(),
            );
        }

        // Cheap early exit; the authoritative check runs under the writer lock
        if self.ctx.document().snapshot().has_user(name) {
            warn!("Registration rejected: name taken");
            return Err(DomainError::DuplicateUser(name.to_string()).into());
        }

        let stored = self.ctx.credential_policy().seal(password)?;
        let user = User::new(name, stored);

        self.ctx
            .document()
            .transact(|doc| doc.insert_user(user).map_err(ServiceError::from))
            .await?;

        info!("User registered successfully");
        Ok(Identity::authenticated(name))
    }

    /// Log in with an existing name and secret
    #[instrument(skip(self, name, password), fields(name = %name))]
    pub fn authenticate(&self, name: &str, password: &str) -> ServiceResult<Identity> {
        match AuthGate::new(self.ctx).verify(name, password) {
            Ok(identity) => {
                info!("User logged in successfully");
                Ok(identity)
            }
            Err(e) => {
                warn!("Login failed: invalid credentials");
                Err(e)
            }
        }
    }
}
