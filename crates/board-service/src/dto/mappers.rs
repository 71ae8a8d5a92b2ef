//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use board_core::entities::{Comment, Post};
use board_core::Identity;

use super::responses::{CommentResponse, IdentityResponse, PostResponse};

impl From<&Identity> for IdentityResponse {
    fn from(identity: &Identity) -> Self {
        Self {
            authenticated: identity.is_authenticated(),
            name: identity.name().map(ToString::to_string),
        }
    }
}

impl From<Identity> for IdentityResponse {
    fn from(identity: Identity) -> Self {
        Self::from(&identity)
    }
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            author: comment.author.clone(),
            text: comment.text.clone(),
        }
    }
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            author: post.author.clone(),
            text: post.text.clone(),
            comment_count: post.comment_count(),
            comments: post.comments.iter().map(CommentResponse::from).collect(),
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self::from(&post)
    }
}
