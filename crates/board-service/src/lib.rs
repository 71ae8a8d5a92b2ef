//! # board-service
//!
//! Application layer: identity resolution, registration and login, posts and
//! comments, request/response DTOs, and the `Board` facade a presentation
//! layer talks to.

pub mod board;
pub mod dto;
pub mod services;

pub use board::Board;
pub use services::{ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult};
