//! # board-core
//!
//! Domain layer containing entities, identity value objects, the document store port,
//! and domain errors.
//! This crate has zero dependencies on infrastructure (file system, network, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Comment, Document, Post, User};
pub use error::DomainError;
pub use traits::{DocumentStore, RepoResult};
pub use value_objects::{
    Credentials, Identity, PostId, Snowflake, SnowflakeGenerator, SnowflakeParseError,
};
