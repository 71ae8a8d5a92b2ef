//! In-process backend

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::warn;

use board_core::entities::Document;
use board_core::traits::{DocumentStore, RepoResult};
use board_core::DomainError;

use crate::mappers::{decode_document, encode_document};

/// Keeps the persisted document as serialized JSON in memory.
///
/// Goes through the same codec as the file backend, so what `raw()` returns
/// is byte-for-byte what would be on disk.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    raw: Mutex<Option<String>>,
    pretty: bool,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    /// Start from previously persisted text (which need not be valid JSON)
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let store = Self::new();
        *store.raw.lock() = Some(raw.into());
        store
    }

    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Persisted text, `None` until the first successful save
    pub fn raw(&self) -> Option<String> {
        self.raw.lock().clone()
    }

    /// Make subsequent reads fail with `StorageFailure`
    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent saves fail with `StorageFailure`
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn try_load(&self) -> RepoResult<Document> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(DomainError::storage("memory store rejected the read"));
        }
        let Some(raw) = self.raw() else {
            return Ok(Document::new());
        };

        Ok(decode_document(raw.as_bytes()).unwrap_or_else(|e| {
            warn!(error = %e, "In-memory document is corrupt, starting empty");
            Document::new()
        }))
    }

    async fn save(&self, document: &Document) -> RepoResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(DomainError::storage("memory store rejected the write"));
        }

        let bytes = encode_document(document, self.pretty).map_err(DomainError::storage)?;
        let text = String::from_utf8(bytes).map_err(DomainError::storage)?;

        *self.raw.lock() = Some(text);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
