//! Response DTOs
//!
//! All response DTOs implement `Serialize`. Post ids are strings.

use serde::Serialize;

/// Who the caller is after an account operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl IdentityResponse {
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            name: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentResponse {
    pub author: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub author: String,
    pub text: String,
    pub comment_count: usize,
    pub comments: Vec<CommentResponse>,
}

/// The feed as seen by an authenticated viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedResponse {
    pub viewer: String,
    /// Creation order, oldest first
    pub posts: Vec<PostResponse>,
}
