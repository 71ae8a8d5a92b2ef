//! Data transfer objects for the board's external interface
//!
//! This module provides:
//! - Request DTOs with validation for inputs
//! - Response DTOs for serializing outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    rejection, AddCommentRequest, CreatePostRequest, LoginRequest, RegisterRequest,
};

// Re-export commonly used response types
pub use responses::{CommentResponse, FeedResponse, IdentityResponse, PostResponse};
