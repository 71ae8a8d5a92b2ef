//! Entity to model mappers
//!
//! - `From<Model> for Entity`: decode persisted records into domain objects
//! - `From<&Entity> for Model`: prepare domain objects for persistence
//! - `decode_document` / `encode_document`: the JSON codec used by every backend

mod document;

pub use document::{decode_document, encode_document};
