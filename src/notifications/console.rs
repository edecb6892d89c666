// ABOUTME: Console notification backend that emits notifications as tracing events
// ABOUTME: Error and warning kinds map to matching log levels, the rest to info
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{NotificationKind, NotificationProvider};
use tracing::{error, info, warn};

/// Writes every notification to the tracing subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    /// Create a console notifier
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl NotificationProvider for ConsoleNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Error => error!(notification.kind = %kind, "{message}"),
            NotificationKind::Warning => warn!(notification.kind = %kind, "{message}"),
            NotificationKind::Success | NotificationKind::Info => {
                info!(notification.kind = %kind, "{message}");
            }
        }
    }
}
