//! Document store trait (port) - whole-document persistence
//!
//! The board persists a single aggregate. The domain layer defines what it
//! needs, and the infrastructure layer provides the implementation.

use async_trait::async_trait;

use crate::entities::Document;
use crate::error::DomainError;

/// Result type for store operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Document Store
// ============================================================================

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read the persisted document.
    ///
    /// Absent or undecodable state is an empty document. A medium that cannot
    /// be read at all fails with `DomainError::StorageFailure`, so that a
    /// writer never mistakes an outage for an empty board.
    async fn try_load(&self) -> RepoResult<Document>;

    /// Load the persisted document, treating an unreadable medium as empty.
    ///
    /// This never fails the caller.
    async fn load(&self) -> Document {
        self.try_load().await.unwrap_or_default()
    }

    /// Replace the persisted document as a whole.
    ///
    /// Fails with `DomainError::StorageFailure` when the medium is unavailable.
    /// A failed save must leave the previously persisted snapshot intact.
    async fn save(&self, document: &Document) -> RepoResult<()>;

    /// Short backend name for diagnostics
    fn backend(&self) -> &'static str;
}
