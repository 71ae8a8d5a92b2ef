//! # board-db
//!
//! Persistence layer implementing the `DocumentStore` port.
//!
//! ## Overview
//!
//! The whole board lives in one JSON document that is read and rewritten as a
//! unit. This crate provides:
//!
//! - Serde models for the persisted layout and entity <-> model mappers
//! - `JsonFileStore`, `MemoryDocumentStore` and `RemoteDocumentStore` backends
//! - `SharedDocument`, which serializes every load -> mutate -> save cycle
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use board_db::{JsonFileStore, SharedDocument};
//!
//! async fn example() -> Result<(), board_core::DomainError> {
//!     let store = Arc::new(JsonFileStore::new("./db.json"));
//!     let shared = SharedDocument::open(store).await;
//!
//!     shared
//!         .transact(|doc| doc.insert_user(board_core::User::new("alice", "p1")))
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod shared;
pub mod stores;

// Re-export commonly used types
pub use mappers::{decode_document, encode_document};
pub use models::{CommentModel, DocumentModel, PostModel, UserModel};
pub use shared::SharedDocument;
pub use stores::{create_store, JsonFileStore, MemoryDocumentStore, RemoteDocumentStore};
