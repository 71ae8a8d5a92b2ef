//! Single-file JSON backend

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument, warn};

use board_core::entities::Document;
use board_core::traits::{DocumentStore, RepoResult};
use board_core::DomainError;

use crate::mappers::{decode_document, encode_document};

/// Stores the whole board as one JSON file.
///
/// Saves go to a sibling `*.tmp` file which is flushed and then renamed over
/// the target, so readers and crashes only ever observe a complete document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileStore {
    /// Create a store for `path` with pretty-printed output
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            pretty: true,
        }
    }

    /// Toggle two-space pretty printing
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| OsString::from("db.json"), ToOwned::to_owned);
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn write_atomically(&self, bytes: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let temp_path = self.temp_path();
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(bytes).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&temp_path, &self.path).await
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn try_load(&self) -> RepoResult<Document> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No document on disk yet, starting empty");
                return Ok(Document::new());
            }
            Err(e) => {
                warn!(error = %e, "Failed to read document");
                return Err(DomainError::storage(format!(
                    "read {}: {e}",
                    self.path.display()
                )));
            }
        };

        Ok(decode_document(&bytes).unwrap_or_else(|e| {
            warn!(error = %e, "Document is corrupt, starting empty");
            Document::new()
        }))
    }

    #[instrument(skip(self, document), fields(path = %self.path.display()))]
    async fn save(&self, document: &Document) -> RepoResult<()> {
        let bytes = encode_document(document, self.pretty).map_err(DomainError::storage)?;

        if let Err(e) = self.write_atomically(&bytes).await {
            // The target is untouched; only the temp file may be left behind
            let _ = fs::remove_file(self.temp_path()).await;
            warn!(error = %e, "Failed to save document");
            return Err(DomainError::storage(format!(
                "write {}: {e}",
                self.path.display()
            )));
        }

        debug!(bytes = bytes.len(), "Document saved");
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "file"
    }
}
