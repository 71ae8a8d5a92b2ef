//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file, if present).

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::auth::CredentialMode;

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    pub app: AppSettings,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub snowflake: SnowflakeConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            env: default_env(),
        }
    }
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Where the board document lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Single JSON file on local disk
    #[default]
    File,
    /// Process memory only; lost on exit
    Memory,
    /// JSON REST endpoint with whole-node GET/PUT
    Remote,
}

/// Document storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
    /// Pretty-print the JSON document (two-space indentation)
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Base URL of the remote backend, e.g. `https://example.firebaseio.com`
    #[serde(default)]
    pub remote_url: Option<String>,
    /// Optional `auth` query token for the remote backend
    #[serde(default)]
    pub remote_auth: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_storage_path(),
            pretty: default_pretty(),
            remote_url: None,
            remote_auth: None,
        }
    }
}

/// Credential storage configuration
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct AuthConfig {
    #[serde(default)]
    pub credential_mode: CredentialMode,
}

/// Snowflake ID generator configuration
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct SnowflakeConfig {
    #[serde(default)]
    pub worker_id: u16,
}

// Default value functions
fn default_app_name() -> String {
    "bulletin-board".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("./db.json")
}

fn default_pretty() -> bool {
    true
}

const MAX_WORKER_ID: u16 = 1023;

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable holds an invalid value
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if a value is invalid or a required value is missing
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("APP_ENV") {
            Some(s) => match s.trim().to_lowercase().as_str() {
                "production" => Environment::Production,
                "staging" => Environment::Staging,
                "development" => Environment::Development,
                _ => return Err(ConfigError::InvalidValue("APP_ENV", s)),
            },
            None => Environment::default(),
        };

        let backend = match lookup("STORAGE_BACKEND") {
            Some(s) => match s.trim().to_lowercase().as_str() {
                "file" => StorageBackend::File,
                "memory" => StorageBackend::Memory,
                "remote" => StorageBackend::Remote,
                _ => return Err(ConfigError::InvalidValue("STORAGE_BACKEND", s)),
            },
            None => StorageBackend::default(),
        };

        let pretty = match lookup("STORAGE_PRETTY") {
            Some(s) => parse_bool(&s).ok_or(ConfigError::InvalidValue("STORAGE_PRETTY", s))?,
            None => default_pretty(),
        };

        let remote_url = lookup("STORAGE_REMOTE_URL").filter(|s| !s.trim().is_empty());
        if backend == StorageBackend::Remote && remote_url.is_none() {
            return Err(ConfigError::MissingVar("STORAGE_REMOTE_URL"));
        }

        let credential_mode = match lookup("CREDENTIAL_MODE") {
            Some(s) => s
                .parse::<CredentialMode>()
                .map_err(|_| ConfigError::InvalidValue("CREDENTIAL_MODE", s))?,
            None => CredentialMode::default(),
        };

        let worker_id = match lookup("WORKER_ID") {
            Some(s) => s
                .trim()
                .parse::<u16>()
                .ok()
                .filter(|id| *id <= MAX_WORKER_ID)
                .ok_or(ConfigError::InvalidValue("WORKER_ID", s))?,
            None => 0,
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            storage: StorageConfig {
                backend,
                path: lookup("STORAGE_PATH").map_or_else(default_storage_path, PathBuf::from),
                pretty,
                remote_url,
                remote_auth: lookup("STORAGE_REMOTE_AUTH").filter(|s| !s.is_empty()),
            },
            auth: AuthConfig { credential_mode },
            snowflake: SnowflakeConfig { worker_id },
        })
    }

    /// Configuration for a file-backed board at `path`, everything else default
    #[must_use]
    pub fn with_storage_path(path: impl Into<PathBuf>) -> Self {
        Self {
            storage: StorageConfig {
                path: path.into(),
                ..StorageConfig::default()
            },
            ..Self::default()
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
