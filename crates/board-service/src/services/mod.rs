//! Business logic services
//!
//! Each service borrows the shared `ServiceContext` and owns one concern.
//! Mutations go through `SharedDocument::transact`; reads use the snapshot.

pub mod auth_gate;
pub mod comment;
pub mod context;
pub mod error;
pub mod post;
pub mod session;
pub mod user;

// Re-export all services for convenience
pub use auth_gate::AuthGate;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;
pub use session::SessionService;
pub use user::UserService;

/// Trim user-supplied text, rejecting it when nothing is left
pub(crate) fn non_empty(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
