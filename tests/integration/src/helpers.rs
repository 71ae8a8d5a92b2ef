//! Test helpers for integration tests
//!
//! Provides a board over a scratch JSON file and small assertion utilities.

use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use board_common::auth::CredentialMode;
use board_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use board_core::Identity;
use board_service::{Board, ServiceResult};
use tempfile::TempDir;

use crate::fixtures::Account;

/// A board whose document lives in a temporary directory
pub struct TestBoard {
    pub board: Board,
    path: PathBuf,
    _dir: TempDir,
}

impl TestBoard {
    /// Start a board with cleartext credentials (fast, for most scenarios)
    pub async fn start() -> Result<Self> {
        Self::start_with_mode(CredentialMode::Plaintext).await
    }

    /// Start a board with the given credential mode
    pub async fn start_with_mode(mode: CredentialMode) -> Result<Self> {
        // Only the first test in the process installs the subscriber
        let _ = try_init_tracing_with_config(TracingConfig::default());

        let dir = tempfile::tempdir().context("create scratch directory")?;
        let path = dir.path().join("db.json");
        let board = Board::open(&test_config(&path, mode)).await?;

        Ok(Self {
            board,
            path,
            _dir: dir,
        })
    }

    /// Path of the persisted document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a second, independent board over the same file
    pub async fn reopen(&self) -> Result<Board> {
        let mode = self.board.context().credential_policy().mode();
        Ok(Board::open(&test_config(&self.path, mode)).await?)
    }

    /// Current persisted bytes, `None` if nothing was saved yet
    pub fn raw(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).context("read persisted document"),
        }
    }

    /// Register `account` and resolve its credentials the way a request would
    pub async fn sign_up(&self, account: &Account) -> Result<Identity> {
        self.board.register(account.register_request()).await?;
        let identity = self.board.resolve(Some(&account.credentials()));
        ensure!(identity.is_authenticated(), "fresh account did not resolve");
        Ok(identity)
    }
}

/// Configuration for a file-backed board at `path`
pub fn test_config(path: &Path, mode: CredentialMode) -> AppConfig {
    let mut config = AppConfig::with_storage_path(path);
    config.app.name = "board-integration".to_string();
    config.auth.credential_mode = mode;
    config
}

/// Assert that `result` failed with the given error code
pub fn assert_error_code<T: std::fmt::Debug>(result: ServiceResult<T>, code: &str) {
    match result {
        Ok(value) => panic!("expected {code}, got Ok({value:?})"),
        Err(e) => assert_eq!(e.error_code(), code, "unexpected error: {e}"),
    }
}
