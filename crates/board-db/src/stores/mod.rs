//! Document store backends

mod file;
mod memory;
mod remote;

use std::sync::Arc;

use board_common::config::{StorageBackend, StorageConfig};
use board_core::traits::DocumentStore;
use board_core::DomainError;

pub use file::JsonFileStore;
pub use memory::MemoryDocumentStore;
pub use remote::RemoteDocumentStore;

/// Build the backend selected by configuration
pub fn create_store(config: &StorageConfig) -> Result<Arc<dyn DocumentStore>, DomainError> {
    let store: Arc<dyn DocumentStore> = match config.backend {
        StorageBackend::File => Arc::new(JsonFileStore::new(&config.path).pretty(config.pretty)),
        StorageBackend::Memory => Arc::new(MemoryDocumentStore::new().pretty(config.pretty)),
        StorageBackend::Remote => {
            let base = config.remote_url.as_deref().ok_or_else(|| {
                DomainError::storage("remote backend selected without a base URL")
            })?;
            Arc::new(RemoteDocumentStore::from_path(
                base,
                &config.path,
                config.remote_auth.clone(),
            ))
        }
    };

    tracing::debug!(backend = store.backend(), "Document store created");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_store_follows_backend() {
        let mut config = StorageConfig::default();
        assert_eq!(create_store(&config).unwrap().backend(), "file");

        config.backend = StorageBackend::Memory;
        assert_eq!(create_store(&config).unwrap().backend(), "memory");

        config.backend = StorageBackend::Remote;
        assert!(create_store(&config).err().unwrap().is_storage());

        config.remote_url = Some("http://127.0.0.1:9".to_string());
        assert_eq!(create_store(&config).unwrap().backend(), "remote");
    }
}
