//! Remote JSON REST backend
//!
//! Speaks the realtime-database REST dialect: the document is one node,
//! `GET <base>/<node>.json` returns it (or `null` when absent) and
//! `PUT <base>/<node>.json` replaces it.

use std::path::Path;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use tracing::{debug, instrument, warn};

use board_core::entities::Document;
use board_core::traits::{DocumentStore, RepoResult};
use board_core::DomainError;

use crate::mappers::decode_document;
use crate::models::DocumentModel;

#[derive(Debug, Clone)]
pub struct RemoteDocumentStore {
    client: Client,
    url: String,
    auth: Option<String>,
}

impl RemoteDocumentStore {
    /// Store the document at node `node` under `base_url`
    pub fn new(base_url: &str, node: &str, auth: Option<String>) -> Self {
        let url = format!(
            "{}/{}.json",
            base_url.trim_end_matches('/'),
            node.trim_matches('/')
        );
        Self {
            client: Client::new(),
            url,
            auth,
        }
    }

    /// Derive the node name from a file path: `./db.json` maps to node `db`
    pub fn from_path(base_url: &str, path: &Path, auth: Option<String>) -> Self {
        let path = path.to_string_lossy();
        let node = path.trim_start_matches("./");
        let node = node.strip_suffix(".json").unwrap_or(node);
        Self::new(base_url, node, auth)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            Some(token) => request.query(&[("auth", token)]),
            None => request,
        }
    }
}

#[async_trait]
impl DocumentStore for RemoteDocumentStore {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn try_load(&self) -> RepoResult<Document> {
        let response = self
            .authorize(self.client.get(&self.url))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Remote document unreachable");
                DomainError::storage(format!("remote read failed: {e}"))
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("Remote node absent, starting empty");
            return Ok(Document::new());
        }
        if !status.is_success() {
            warn!(%status, "Remote document read rejected");
            return Err(DomainError::storage(format!(
                "remote read rejected with status {status}"
            )));
        }

        let bytes = response.bytes().await.map_err(|e| {
            warn!(error = %e, "Remote document read interrupted");
            DomainError::storage(format!("remote read interrupted: {e}"))
        })?;

        Ok(decode_document(&bytes).unwrap_or_else(|e| {
            warn!(error = %e, "Remote document is corrupt, starting empty");
            Document::new()
        }))
    }

    #[instrument(skip(self, document), fields(url = %self.url))]
    async fn save(&self, document: &Document) -> RepoResult<()> {
        let model = DocumentModel::from(document);
        let response = self
            .authorize(self.client.put(&self.url))
            .json(&model)
            .send()
            .await
            .map_err(|e| DomainError::storage(format!("remote write failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Remote document write rejected");
            return Err(DomainError::storage(format!(
                "remote write rejected with status {status}"
            )));
        }

        debug!("Document saved");
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "remote"
    }
}
