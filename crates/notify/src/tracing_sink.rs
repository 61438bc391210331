//! Tracing-backed sink.

use shelfstock_inventory::MAX_PRODUCTS;

use crate::sink::NotificationSink;

/// Renders notifications as structured `tracing` events.
///
/// Stand-in for the host's toast layer: a headless consumer (tests, dev
/// harness) gets the same two outcome messages a user would see.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationSink for TracingSink {
    fn notify_added(&self, name: &str, count: usize) {
        tracing::info!(
            product = name,
            count,
            capacity = MAX_PRODUCTS,
            "product added to inventory"
        );
    }

    fn notify_limit_reached(&self, name: &str) {
        tracing::warn!(
            product = name,
            capacity = MAX_PRODUCTS,
            "product limit reached"
        );
    }
}
