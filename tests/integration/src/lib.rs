//! Integration test utilities for the bulletin board
//!
//! This crate provides helpers for running end-to-end scenarios against a
//! `Board` backed by a real JSON file in a scratch directory.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
