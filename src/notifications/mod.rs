// ABOUTME: Notification port for user-facing success, error, info and warning messages
// ABOUTME: Console (tracing) and broadcast-channel backends behind one trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Notifications are fire-and-forget: emitting one never fails and returns
//! nothing to the caller.

/// Broadcast-channel notifier for UI subscribers
pub mod broadcast;
/// Console notifier emitting tracing events
pub mod console;

pub use broadcast::BroadcastNotifier;
pub use console::ConsoleNotifier;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Operation completed
    Success,
    /// Operation failed
    Error,
    /// Neutral information
    Info,
    /// Something needs attention
    Warning,
}

impl NotificationKind {
    /// Lower-case wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One emitted notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Severity
    pub kind: NotificationKind,
    /// User-facing text
    pub message: String,
    /// Emission time
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create a notification stamped with the current time
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}

/// Notification provider trait for pluggable backends
///
/// Implementors supply [`NotificationProvider::notify`]; the per-kind methods
/// delegate to it.
pub trait NotificationProvider: Send + Sync {
    /// Emit a notification of `kind`
    fn notify(&self, kind: NotificationKind, message: &str);

    /// Emit a success notification
    fn success(&self, message: &str) {
        self.notify(NotificationKind::Success, message);
    }

    /// Emit an error notification
    fn error(&self, message: &str) {
        self.notify(NotificationKind::Error, message);
    }

    /// Emit an info notification
    fn info(&self, message: &str) {
        self.notify(NotificationKind::Info, message);
    }

    /// Emit a warning notification
    fn warning(&self, message: &str) {
        self.notify(NotificationKind::Warning, message);
    }
}
