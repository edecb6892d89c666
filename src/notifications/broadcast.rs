// ABOUTME: Broadcast-channel notification backend for UI subscribers
// ABOUTME: Fans each notification out to every live receiver; no receivers is not an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Notification, NotificationKind, NotificationProvider};
use crate::constants::defaults::NOTIFICATION_CHANNEL_CAPACITY;
use tokio::sync::broadcast;
use tracing::trace;

/// Publishes notifications on a `tokio::sync::broadcast` channel
///
/// Slow receivers lag and lose the oldest messages rather than blocking the
/// sender.
#[derive(Debug, Clone)]
pub struct BroadcastNotifier {
    sender: broadcast::Sender<Notification>,
}

impl BroadcastNotifier {
    /// Create a notifier with the default channel capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(NOTIFICATION_CHANNEL_CAPACITY)
    }

    /// Create a notifier buffering up to `capacity` messages per receiver
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribe to notifications emitted from now on
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    /// Number of live subscribers
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationProvider for BroadcastNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        if self.sender.send(Notification::new(kind, message)).is_err() {
            trace!(notification.kind = %kind, "Notification dropped, no subscribers");
        }
    }
}
