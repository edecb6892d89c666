// ABOUTME: Environment-based client configuration with typed backend switches
// ABOUTME: Parses LIFTLOG_* variables into ClientConfig with validation of the base URL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Client configuration from environment variables
//!
//! | Variable | Default |
//! |---|---|
//! | `LIFTLOG_USE_REMOTE_AUTH` | `false` |
//! | `LIFTLOG_USE_REMOTE_EXERCISES` | value of `LIFTLOG_USE_REMOTE_AUTH` |
//! | `LIFTLOG_USE_REMOTE_CATALOG` | value of `LIFTLOG_USE_REMOTE_AUTH` |
//! | `LIFTLOG_API_URL` | `http://localhost:8080/exercise-logging` |
//! | `LIFTLOG_STORAGE` | `file` (`memory` keeps nothing across runs) |
//! | `LIFTLOG_DATA_DIR` | platform data dir + `/liftlog` |
//! | `LIFTLOG_HTTP_TIMEOUT_SECS` | `30` |
//! | `LIFTLOG_HTTP_CONNECT_TIMEOUT_SECS` | `10` |

use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;
use url::Url;

/// Where local data lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-lifetime map
    Memory,
    /// JSON document at `path`
    File {
        /// Location of the store file
        path: PathBuf,
    },
}

/// Timeouts of the shared HTTP client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Whole-request timeout, seconds
    pub timeout_secs: u64,
    /// Connect timeout, seconds
    pub connect_timeout_secs: u64,
}

impl HttpClientConfig {
    /// Whole-request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connect timeout
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: defaults::HTTP_TIMEOUT_SECS,
            connect_timeout_secs: defaults::HTTP_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Resolved client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Authenticate against the remote backend instead of the local user table
    pub use_remote_auth: bool,
    /// Read and write exercise logs through the remote backend when signed in
    pub use_remote_exercises: bool,
    /// Manage the catalog through the remote admin endpoints
    pub use_remote_catalog: bool,
    /// Base URL of the remote backend, without trailing slash
    pub base_url: String,
    /// Local storage backend
    pub storage: StorageBackend,
    /// HTTP client timeouts
    pub http: HttpClientConfig,
    /// Password of the administrator seeded into the local user table, if any
    pub seed_admin_password: Option<String>,
}

impl Default for ClientConfig {
    /// Everything local and in memory
    fn default() -> Self {
        Self {
            use_remote_auth: false,
            use_remote_exercises: false,
            use_remote_catalog: false,
            base_url: defaults::API_BASE_URL.to_owned(),
            storage: StorageBackend::Memory,
            http: HttpClientConfig::default(),
            seed_admin_password: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable holds an unparseable value or the
    /// resolved configuration fails [`ClientConfig::validate`]
    pub fn from_env() -> AppResult<Self> {
        let use_remote_auth = parse_env("LIFTLOG_USE_REMOTE_AUTH", false, parse_bool)?;
        let use_remote_exercises =
            parse_env("LIFTLOG_USE_REMOTE_EXERCISES", use_remote_auth, parse_bool)?;
        let use_remote_catalog =
            parse_env("LIFTLOG_USE_REMOTE_CATALOG", use_remote_auth, parse_bool)?;

        let storage = match env_var_or("LIFTLOG_STORAGE", "file").to_lowercase().as_str() {
            "memory" => StorageBackend::Memory,
            "file" => StorageBackend::File {
                path: data_dir().join(defaults::STORE_FILE_NAME),
            },
            other => {
                return Err(AppError::config(format!(
                    "Invalid LIFTLOG_STORAGE value '{other}' (expected 'memory' or 'file')"
                )))
            }
        };

        let config = Self {
            use_remote_auth,
            use_remote_exercises,
            use_remote_catalog,
            base_url: env_var_or("LIFTLOG_API_URL", defaults::API_BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
            storage,
            http: HttpClientConfig {
                timeout_secs: parse_env(
                    "LIFTLOG_HTTP_TIMEOUT_SECS",
                    defaults::HTTP_TIMEOUT_SECS,
                    parse_number,
                )?,
                connect_timeout_secs: parse_env(
                    "LIFTLOG_HTTP_CONNECT_TIMEOUT_SECS",
                    defaults::HTTP_CONNECT_TIMEOUT_SECS,
                    parse_number,
                )?,
            },
            seed_admin_password: env::var("LIFTLOG_ADMIN_PASSWORD")
                .ok()
                .filter(|p| !p.is_empty()),
        };
        config.validate()?;

        info!(
            remote_auth = config.use_remote_auth,
            remote_exercises = config.use_remote_exercises,
            remote_catalog = config.use_remote_catalog,
            base_url = %config.base_url,
            storage = ?config.storage,
            "Loaded client configuration"
        );
        Ok(config)
    }

    /// Whether any remote switch is on
    #[must_use]
    pub const fn uses_remote(&self) -> bool {
        self.use_remote_auth || self.use_remote_exercises || self.use_remote_catalog
    }

    /// Check the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a remote switch is on and `base_url` is not
    /// an absolute `http`/`https` URL
    pub fn validate(&self) -> AppResult<()> {
        if !self.uses_remote() {
            return Ok(());
        }
        let url = Url::parse(&self.base_url).map_err(|e| {
            AppError::config(format!("Invalid API base URL '{}': {e}", self.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::config(format!(
                "API base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }
        Ok(())
    }
}

/// Platform data directory for the client, falling back to the working directory
fn data_dir() -> PathBuf {
    env::var("LIFTLOG_DATA_DIR").map_or_else(
        |_| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(defaults::DATA_DIR_NAME)
        },
        PathBuf::from,
    )
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an optional environment variable, keeping `default` when unset
fn parse_env<T>(key: &str, default: T, parse: fn(&str) -> Option<T>) -> AppResult<T> {
    match env::var(key) {
        Ok(raw) => parse(raw.trim())
            .ok_or_else(|| AppError::config(format!("Invalid {key} value '{raw}'"))),
        Err(_) => Ok(default),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_number<T: FromStr>(raw: &str) -> Option<T> {
    raw.parse().ok()
}
