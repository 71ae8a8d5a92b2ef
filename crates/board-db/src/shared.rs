//! Serialized access to the board document
//!
//! Every mutation runs load -> mutate -> save while holding one async mutex,
//! so two requests can never both read the same snapshot and then overwrite
//! each other's save. Readers are served from an in-memory snapshot that is
//! swapped only after a save has succeeded.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use board_core::entities::Document;
use board_core::traits::DocumentStore;
use board_core::DomainError;

pub struct SharedDocument {
    store: Arc<dyn DocumentStore>,
    writer: Mutex<()>,
    snapshot: RwLock<Arc<Document>>,
}

impl SharedDocument {
    /// Load the current document from `store` and take ownership of it
    pub async fn open(store: Arc<dyn DocumentStore>) -> Self {
        let initial = store.load().await;
        debug!(
            backend = store.backend(),
            users = initial.users.len(),
            posts = initial.posts.len(),
            "Document opened"
        );

        Self {
            store,
            writer: Mutex::new(()),
            snapshot: RwLock::new(Arc::new(initial)),
        }
    }

    /// Latest committed document. Never waits on a writer.
    pub fn snapshot(&self) -> Arc<Document> {
        Arc::clone(&self.snapshot.read())
    }

    /// Re-read the store, replacing the snapshot.
    ///
    /// If the store cannot be read the current snapshot is kept and returned.
    pub async fn refresh(&self) -> Arc<Document> {
        let _guard = self.writer.lock().await;
        match self.store.try_load().await {
            Ok(doc) => {
                let fresh = Arc::new(doc);
                *self.snapshot.write() = Arc::clone(&fresh);
                fresh
            }
            Err(e) => {
                warn!(error = %e, "Refresh failed, keeping current snapshot");
                self.snapshot()
            }
        }
    }

    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    /// Run `mutate` against the freshly loaded document and persist the result.
    ///
    /// If the store cannot be read, `mutate` never runs and nothing is saved.
    /// If `mutate` fails nothing is saved. If the save fails the error is
    /// returned and the snapshot keeps its previous value.
    #[instrument(skip_all, fields(backend = self.store.backend()))]
    pub async fn transact<T, E, F>(&self, mutate: F) -> Result<T, E>
    where
        F: FnOnce(&mut Document) -> Result<T, E>,
        E: From<DomainError>,
    {
        let _guard = self.writer.lock().await;

        let mut doc = match self.store.try_load().await {
            Ok(doc) => doc,
            Err(e) => {
                warn!(error = %e, "Load failed, mutation not attempted");
                return Err(E::from(e));
            }
        };
        let output = mutate(&mut doc)?;

        if let Err(e) = self.store.save(&doc).await {
            warn!(error = %e, "Save failed, mutation discarded");
            return Err(E::from(e));
        }

        *self.snapshot.write() = Arc::new(doc);
        Ok(output)
    }
}

impl fmt::Debug for SharedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedDocument")
            .field("backend", &self.store.backend())
            .finish_non_exhaustive()
    }
}
