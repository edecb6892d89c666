// ABOUTME: Logging configuration and structured logging setup for the LiftLog client
// ABOUTME: Configures log levels, output format and noise filters; logs go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Logging configuration with structured output
//!
//! Logs are written to stderr so command output on stdout stays clean. The
//! default level is `warn`: a CLI run prints nothing but its result unless
//! `RUST_LOG` or `--verbose` asks for more.

use anyhow::Result;
use std::env;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Crates whose request-level chatter is capped at `warn`
const NOISY_TARGETS: &[&str] = &["hyper", "hyper_util", "reqwest"];

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `warn` or `liftlog=debug`
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Deployment label reported at startup (`development`, `production`)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-line human format
    Pretty,
    /// Single-line human format
    #[default]
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; anything unknown is compact
    #[must_use]
    pub fn from_str_or_default(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            format: LogFormat::Compact,
            include_location: false,
            environment: "development".to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Read `RUST_LOG`, `LOG_FORMAT`, `LOG_INCLUDE_LOCATION` and `ENVIRONMENT`
    ///
    /// Production always includes source locations.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);
        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .map_or(defaults.format, |raw| LogFormat::from_str_or_default(&raw)),
            include_location: environment == "production"
                || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            environment,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        NOISY_TARGETS
            .iter()
            .filter_map(|target| format!("{target}=warn").parse().ok())
            .fold(EnvFilter::new(&self.level), EnvFilter::add_directive)
    }

    /// Install the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let layer = fmt::layer()
            .with_writer(io::stderr)
            .with_file(self.include_location)
            .with_line_number(self.include_location);

        match self.format {
            LogFormat::Json => registry.with(layer.with_target(true).json()).try_init()?,
            LogFormat::Pretty => registry.with(layer.with_target(true).pretty()).try_init()?,
            LogFormat::Compact => registry.with(layer.with_target(false).compact()).try_init()?,
        }

        debug!(
            version = env!("CARGO_PKG_VERSION"),
            environment = %self.environment,
            level = %self.level,
            format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

/// Install the default quiet subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init_default() -> Result<()> {
    LoggingConfig::default().init()
}

/// Install a subscriber configured from the environment
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Structured events shared by the adapters and services
pub struct AppLogger;

impl AppLogger {
    /// Sign-in, registration or sign-out outcome for `subject` (an email)
    pub fn log_auth_event(subject: &str, event: &str, success: bool, details: Option<&str>) {
        info!(
            auth.subject = %subject,
            auth.event = %event,
            auth.success = success,
            auth.details = details.unwrap_or(""),
            "Auth event"
        );
    }

    /// One completed call to the remote backend
    pub fn log_remote_request(method: &str, path: &str, status: u16, duration_ms: u64) {
        debug!(
            http.method = %method,
            http.path = %path,
            http.status = status,
            http.duration_ms = duration_ms,
            "Remote request"
        );
    }

    /// One key-value store write
    pub fn log_storage_operation(operation: &str, key: &str, success: bool) {
        debug!(
            storage.operation = %operation,
            storage.key = %key,
            storage.success = success,
            "Storage operation"
        );
    }
}
