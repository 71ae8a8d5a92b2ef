//! Domain entities - core business objects

mod document;
mod post;
mod user;

pub use document::Document;
pub use post::{Comment, Post};
pub use user::User;
