use std::sync::Arc;

use shelfstock_inventory::AddOutcome;

/// Presentation-facing outcome reporter.
///
/// Implementations must be non-blocking and best-effort: a sink failure must
/// never propagate back into inventory code. A broken toast is a cosmetic
/// problem; it must not take the add flow down with it.
///
/// Two capabilities cover the reference behavior: a success notification
/// carrying the running count, and a limit notification keyed by product
/// name. The limit notification fires both when the final slot is filled and
/// when an add is rejected — in the rejected case the name belongs to a
/// product that was never added.
pub trait NotificationSink: Send + Sync {
    /// A product was added with spare capacity remaining.
    fn notify_added(&self, name: &str, count: usize);

    /// The capacity limit was reached (final slot filled, or add rejected).
    fn notify_limit_reached(&self, name: &str);

    /// Map a structured add outcome onto the two capabilities.
    fn deliver(&self, outcome: &AddOutcome) {
        match outcome {
            AddOutcome::Added { name, count } => self.notify_added(name, *count),
            AddOutcome::AddedAtCapacity { name } | AddOutcome::Rejected { name } => {
                self.notify_limit_reached(name)
            }
        }
    }
}

impl<S> NotificationSink for Arc<S>
where
    S: NotificationSink + ?Sized,
{
    fn notify_added(&self, name: &str, count: usize) {
        (**self).notify_added(name, count)
    }

    fn notify_limit_reached(&self, name: &str) {
        (**self).notify_limit_reached(name)
    }
}
