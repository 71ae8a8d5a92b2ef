//! Session service

use board_core::Identity;
use tracing::{debug, info, instrument};

use super::context::ServiceContext;

/// Session teardown. Discarding the transport's token is the caller's job.
pub struct SessionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SessionService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Acknowledge a logout; the caller is anonymous afterwards
    #[instrument(skip_all, fields(name = identity.name()))]
    pub fn logout(&self, identity: &Identity) -> Identity {
        if identity.is_authenticated() {
            info!("User logged out");
        } else {
            debug!(backend = self.ctx.document().backend(), "Logout without a session");
        }
        Identity::Anonymous
    }
}
