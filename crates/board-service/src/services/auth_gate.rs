//! Identity resolution
//!
//! Turns presented credentials into an `Identity`. Nothing here mutates the
//! document; lookups go against the latest committed snapshot.

use board_core::{Credentials, DomainError, Identity};
use tracing::{debug, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Credential gate in front of every board operation
pub struct AuthGate<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthGate<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve presented credentials; anything that does not check out is `Anonymous`
    #[instrument(skip_all, fields(name = credentials.map(Credentials::name)))]
    pub fn resolve(&self, credentials: Option<&Credentials>) -> Identity {
        let Some(credentials) = credentials else {
            return Identity::Anonymous;
        };

        match self.verify(credentials.name(), credentials.secret()) {
            Ok(identity) => identity,
            Err(_) => {
                debug!("Presented credentials rejected, treating as anonymous");
                Identity::Anonymous
            }
        }
    }

    /// Check a name/secret pair against the stored users.
    ///
    /// Unknown names and wrong secrets produce the same error.
    pub fn verify(&self, name: &str, secret: &str) -> ServiceResult<Identity> {
        let snapshot = self.ctx.document().snapshot();
        let policy = self.ctx.credential_policy();

        let Some(user) = snapshot.find_user(name) else {
            policy.verify_unknown(secret);
            return Err(DomainError::InvalidCredentials.into());
        };

        let matches = policy.verify(secret, &user.password).unwrap_or_else(|e| {
            warn!(name = %user.name, error = %e, "Stored credential is unreadable");
            false
        });

        if matches {
            Ok(Identity::authenticated(user.name.clone()))
        } else {
            Err(DomainError::InvalidCredentials.into())
        }
    }
}
