//! In-memory recording sink for tests/dev.

use std::sync::Mutex;

use crate::sink::NotificationSink;

/// A notification as observed by the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Added { name: String, count: usize },
    LimitReached { name: String },
}

/// Records notifications instead of rendering them.
///
/// - No IO / no async
/// - Best-effort: a poisoned lock drops the notification rather than
///   panicking back into the caller
#[derive(Debug, Default)]
pub struct RecordingSink {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, in delivery order.
    pub fn recorded(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn record(&self, notification: Notification) {
        if let Ok(mut guard) = self.notifications.lock() {
            guard.push(notification);
        }
    }
}

impl NotificationSink for RecordingSink {
    fn notify_added(&self, name: &str, count: usize) {
        self.record(Notification::Added {
            name: name.to_string(),
            count,
        });
    }

    fn notify_limit_reached(&self, name: &str) {
        self.record(Notification::LimitReached {
            name: name.to_string(),
        });
    }
}
