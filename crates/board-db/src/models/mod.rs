//! Persisted document models
//!
//! These mirror the on-disk JSON layout exactly:
//! `{"users": [{"name", "password"}], "posts": [{"id", "author", "text", "comments": [...]}]}`.

mod document;

pub use document::{CommentModel, DocumentModel, PostModel, UserModel};
